// @generated by help2code from `CIVET_Processing_Pipeline -help`.
// Regenerate:
//     CIVET_Processing_Pipeline -help | help2code > src/catalog/flags.rs

use super::Catalog;

/// Every recognized pipeline flag, in the order `-help` lists them.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn civet_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.section("Execution control");
    catalog.flag("-spawn", "Use the perl system interface to spawn jobs [default: use local host scheduler DEFAULT]");
    catalog.valued("-queue", "queue", "Which queue to use");
    catalog.valued("-hosts", "hosts", "Colon separated list of hosts");
    catalog.valued("-qopts", "opts", "Extra options to queuing system");
    catalog.flag("-no-granular", "Granularity level for submission of jobs using queueing system. [default]");
    catalog.flag("-granular", "opposite of -no-granular");
    catalog.valued("-maxqueued", "val", "Maximum number of jobs that can be submitted at once. [default: 10000]");
    catalog.flag("-mpi", "Submit jobs using mpirun to fill all processors on core.");
    catalog.flag("-no-mpi", "opposite of -mpi [default]");

    catalog.section("File options");
    catalog.valued("-prefix", "prefix", "File prefix to be used in naming output files.");
    catalog.flag("-id-subdir", "Indicate that the source directory contains sub-directories for each id");
    catalog.valued("-id-file", "file", "A text file that contains all the subject id's (separated by space, tab, return or comma) that CIVET will run on.");

    catalog.section("Pipeline options");
    catalog.valued("-template", "val", "Define the template for image processing in stereotaxic space (0.50, 0.75, 1.00, 1.50, 2.00, 3.00, 4.00, 6.00). [default: 1.00]");
    catalog.valued("-model", "model", "Define the model for image-processing: \"colin27\" (MNI Colin27 asymmetric (2009)), \"icbm152nl_09s\" (MNI ICBM152 non-linear symmetric (2009a)), \"icbm152nl\" (MNI ICBM152 non-linear 6th generation), \"icbm152lin\" (MNI ICBM152 linear), \"ibis-v24\" (MNI IBIS 24 months, symmetric (2015)), \"ADNIhires\" (MNI ADNI non-linear hi-res sym 0.5mm)  [default: icbm152nl_09s]");
    catalog.valued("-surfreg-model", "model", "Define the model for surface registration: \"icbm152MCsym\" (ICBM152, marching-cubes, symmetric (2014)), \"colinMCasym\" (Colin, marching-cubes, asymmetric (2014)), \"samirMCasym\" (IBIS Phantom (Samir), marching-cubes, asymmetric (2014))");
    catalog.valued("-surface-atlas", "model", "Define the atlas for surface parcellation: \"lobes\" (coarse lobar parcellation, symmetric), \"AAL\" (AAL parcellation, asymmetric, based on Colin brain), \"DKT\" (DKT-40 parcellation, asymmetric) [default: lobes]");

    catalog.section("CIVET options");
    catalog.flag("-input_is_stx", "Assume that the input volume is already linearly regsieted to stx space; this skips the linear registration steps");
    catalog.flag("-noinput_is_stx", "opposite of -input_is_stx [default]");
    catalog.flag("-multispectral", "Use T1, T2 and PD native files for tissue classification.");
    catalog.flag("-correct-pve", "Apply correction to the mean and variance of tissue types at pve iterations. [default]");
    catalog.flag("-no-correct-pve", "opposite of -correct-pve");
    catalog.flag("-mask-cerebellum", "mask cerebellum and brainstem from pve classification [default]");
    catalog.flag("-no-mask-cerebellum", "opposite of -mask-cerebellum");
    catalog.flag("-subcortical", "create a sub-cortical SC class in pve classification [default]");
    catalog.flag("-no-subcortical", "opposite of -subcortical");
    catalog.flag("-calibrate-white", "Apply gradient intensity correction for calibration of white surface. [default]");
    catalog.flag("-no-calibrate-white", "opposite of -calibrate-white");
    catalog.flag("-spectral_mask", "Use T1, T2 and PD stereotaxic files for brain masking.");
    catalog.valued("-interp", "method", "Interpolation method from native to stereotaxic space (\"trilinear\", \"tricubic\", \"sinc\") [default: trilinear]");
    catalog.valued("-headheight", "dist", "head height in mm for neck cropping (use 0 for none). [default: 175]");
    catalog.valued("-N3-distance", "dist", "N3 spline distance in mm (suggested values: 200 for 1.5T scan; 50 for 3T scan).");
    catalog.valued("-N3-damping", "lambda", "N3 damping coefficient (lambda) (suggested values: 2.0e-06). [default: 2.0e-06]");
    catalog.flag("-lsq6", "use 6-parameter transformation for linear registration [default -lsq9]");
    catalog.flag("-lsq12", "use 12-parameter transformation for linear registration [default -lsq9]");
    catalog.flag("-no-surfaces", "don't build surfaces");
    catalog.flag("-hi-res-surfaces", "build high resolution surfaces");
    catalog.flag("-mask-blood-vessels", "mask blood vessels prior to white surface extraction");
    catalog.flag("-no-mask-blood-vessel", "opposite of -mask-blood-vessels [default]");
    catalog.flag("-mask-hippocampus", "mask hippocampus and amygdala for surface extraction if model supports it [default]");
    catalog.flag("-no-mask-hippocampus", "opposite of -mask-hippocampus");
    catalog.paired("-thickness", "T:T:T N:N", "compute cortical thickness and blur [tlink][:tlaplace][:tfs] [fwhm1][:fwhm2]:...[:fwhmN] kernel sizes in mm [default: tlink 30]");
    catalog.flag("-resample-surfaces", "resample cortical surfaces");
    catalog.flag("-no-resample-surfaces", "opposite of -resample-surfaces [default]");
    catalog.flag("-mean-curvature", "produce mean curvature maps on surfaces");
    catalog.flag("-no-mean-curvature", "opposite of -mean-curvature [default]");
    catalog.valued("-area-fwhm", "fwhm", "fwhm1:fwhm2:...:fwhmn blurring kernel sizes in mm for resampled surface areas [default: 40]");
    catalog.valued("-volume-fwhm", "fwhm", "fwhm1:fwhm2:...:fwhmn blurring kernel sizes in mm for resampled surface volumes [default: 40]");
    catalog.flag("-combine-surfaces", "combine left and right cortical surfaces");
    catalog.flag("-no-combine-surfaces", "opposite of -combine-surfaces [default]");

    catalog.section("VBM options");
    catalog.flag("-VBM", "process VBM files for analysis [default -no-VBM]");
    catalog.flag("-no-VBM", "don't process VBM files for analysis");
    catalog.valued("-VBM-fwhm", "fwhm", "blurring kernel size in mm for volume [default: 8]");
    catalog.flag("-VBM-symmetry", "run symmetry tools [default -no-VBM-symmetry]");
    catalog.flag("-no-VBM-symmetry", "don't run symmetry tools");
    catalog.flag("-VBM-cerebellum", "keep cerebellum in VBM maps");
    catalog.flag("-no-VBM-cerebellum", "mask out cerebellum in VBM maps [default -VBM-cerebellum]");

    catalog.section("ANIMAL options");
    catalog.flag("-animal", "run volumetric ANIMAL segmentation [default -no-animal]");
    catalog.flag("-no-animal", "don't run volumetric ANIMAL segmentation");
    catalog.valued("-lobe_atlas", "model", "Use lobe atlas for ANIMAL segmentation (mandatory with -animal): \"icbm152nl-VI\" (ICBM152 generation VI symmetric model), \"icbm152nl-2009a\" (ICBM152 2009a symmetric model)");

    catalog.section("Pipeline control");
    catalog.flag("-run", "Run the pipeline.");
    catalog.flag("-status-from-files", "Compute pipeline status from files");
    catalog.flag("-print-stages", "Print the pipeline stages.");
    catalog.flag("-print-status", "Print the status of each pipeline.");
    catalog.flag("-make-graph", "Create dot graph file.");
    catalog.flag("-make-filename-graph", "Create dot graph of filenames.");
    catalog.flag("-print-status-report", "Writes a CSV status report to file in cwd.");

    catalog.section("Stage Control");
    catalog.flag("-reset-all", "Start the pipeline from the beginning.");
    catalog.valued("-reset-from", "stage_name", "Restart from the specified stage.");
    catalog.valued("-reset-after", "stage_name", "Restart after the specified stage.");
    catalog.valued("-reset-to", "stage_name", "Run up to and including the specified stage.");
    catalog.flag("-reset-running", "Restart currently running jobs. [default]");
    catalog.flag("-no-reset-running", "opposite of -reset-running");

    catalog
}
