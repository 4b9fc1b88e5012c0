/// Serializable plugin metadata.
///
/// This is what the workflow platform reads (via `--meta`) to register the
/// wrapper as a plugin. Field names follow the platform's descriptor keys.
use serde::Serialize;

/// Plugin descriptor for the workflow platform.
#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    /// Human-readable plugin title.
    pub title: &'static str,
    /// Plugin authors and contact.
    pub authors: &'static str,
    /// Plugin type: "ds" (data-synthesis) plugins take an input and an
    /// output directory.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Free-form category label.
    pub category: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Upstream documentation URL.
    pub documentation: &'static str,
    /// License of the wrapped pipeline.
    pub license: &'static str,
    /// Wrapper version, kept in lockstep with the pipeline release.
    pub version: &'static str,
    /// Scheduling limits the platform enforces for this plugin.
    pub max_number_of_workers: u32,
    pub min_number_of_workers: u32,
    pub max_cpu_limit: &'static str,
    pub min_cpu_limit: &'static str,
    pub max_memory_limit: &'static str,
    pub min_memory_limit: &'static str,
    pub min_gpu_limit: u32,
    pub max_gpu_limit: u32,
}

impl PluginMeta {
    /// Descriptor for the CIVET wrapper.
    #[must_use]
    pub fn civet() -> Self {
        Self {
            title: "CIVET Pipeline",
            authors: "FNNDSC (dev@babyMRI.org)",
            kind: "ds",
            category: "MRI",
            description: "CIVET is an image processing pipeline for fully automated \
                          volumetric, corticometric, and morphometric analysis of human \
                          brain imaging data (MRI).",
            documentation: "http://www.bic.mni.mcgill.ca/ServicesSoftware/CIVET-2-1-0-Table-of-Contents",
            license: "Civet core",
            version: env!("CARGO_PKG_VERSION"),
            max_number_of_workers: 1,
            min_number_of_workers: 1,
            max_cpu_limit: "",
            min_cpu_limit: "",
            max_memory_limit: "",
            min_memory_limit: "",
            min_gpu_limit: 0,
            max_gpu_limit: 0,
        }
    }
}
