use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{
    composite::{composite_over, resize_to_match},
    config::Config,
    error::{CompositorError, PipelineError, Result},
    keying::{declassify, KeyMode, KeyModeRegistry},
    raster::{load_canvas, save_png, Canvas},
};

/// Exit status for strict runs that fell back to the plain background
pub const FELL_BACK_EXIT_STATUS: u8 = 2;

/// One background/overlay pair and where the result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeJob {
    pub background: PathBuf,
    pub overlay: PathBuf,
    pub output: PathBuf,

    /// Copy the background to `output` if compositing fails
    pub fallback: bool,
}

/// How a run ended
#[derive(Debug)]
pub enum CompositeOutcome {
    /// The keyed overlay was composited and written
    Composited { output: PathBuf },

    /// Compositing failed and the background was copied to the output instead
    FellBack {
        output: PathBuf,
        reason: CompositorError,
    },
}

impl CompositeOutcome {
    /// The file that was written, in either case
    pub fn output(&self) -> &Path {
        match self {
            Self::Composited { output } | Self::FellBack { output, .. } => output,
        }
    }

    pub fn is_composited(&self) -> bool {
        matches!(self, Self::Composited { .. })
    }

    /// Process exit status for this outcome.
    ///
    /// A fallback counts as success unless `strict` is set, in which case it
    /// maps to [`FELL_BACK_EXIT_STATUS`].
    pub fn exit_status(&self, strict: bool) -> u8 {
        match self {
            Self::FellBack { .. } if strict => FELL_BACK_EXIT_STATUS,
            _ => 0,
        }
    }

    /// The failure the fallback covered, if any
    pub fn warning(&self) -> Option<&CompositorError> {
        match self {
            Self::Composited { .. } => None,
            Self::FellBack { reason, .. } => Some(reason),
        }
    }
}

/// Keys the overlay and composites it onto the background
///
/// The pipeline is:
/// 1. Load - decode background and overlay as RGBA
/// 2. Resize - bring the overlay to the background's resolution
/// 3. Key - make near-black overlay pixels transparent, map the rest through the mode
/// 4. Composite - source-over the keyed overlay onto the background
/// 5. Save - write the result as PNG
pub struct KeyedCompositor {
    mode: Box<dyn KeyMode>,
}

impl KeyedCompositor {
    /// Create a new compositor using the given key mode
    pub fn new(mode: Box<dyn KeyMode>) -> Self {
        Self { mode }
    }

    /// Create a compositor for the mode named in `config`
    pub fn from_config(config: &Config, registry: &KeyModeRegistry) -> Result<Self> {
        config.validate()?;
        let name = config.keying.mode.as_deref().unwrap_or_default();
        Ok(Self::new(registry.resolve(name)?))
    }

    pub fn mode(&self) -> &dyn KeyMode {
        self.mode.as_ref()
    }

    /// Run steps 2-4 on canvases already in memory
    pub fn compose(&self, background: &Canvas, overlay: &Canvas) -> Result<Canvas> {
        let overlay = resize_to_match(overlay, background);
        let keyed = declassify(&overlay, self.mode());
        composite_over(background, &keyed)
    }

    /// Run the whole pipeline on files, without any fallback
    ///
    /// Both inputs are decoded before anything is written, so a decode failure
    /// leaves `output` untouched.
    pub fn compose_files<P: AsRef<Path>>(
        &self,
        background: P,
        overlay: P,
        output: P,
    ) -> Result<()> {
        let background = load_canvas(background)?;
        let overlay = load_canvas(overlay)?;

        debug!("Keying overlay with '{}' mode", self.mode.name());
        let composed = self.compose(&background, &overlay)?;

        save_png(&composed, output)
    }

    /// Run a job, applying its fallback policy on failure
    pub fn run(&self, job: &CompositeJob) -> Result<CompositeOutcome> {
        info!(
            "Compositing {:?} onto {:?} ({} mode)",
            job.overlay,
            job.background,
            self.mode.name()
        );

        let error = match self.compose_files(&job.background, &job.overlay, &job.output) {
            Ok(()) => {
                info!("Composite written to: {:?}", job.output);
                return Ok(CompositeOutcome::Composited { output: job.output.clone() });
            }
            Err(e) => e,
        };

        if !job.fallback || !error.is_fallback_eligible() {
            return Err(error);
        }

        warn!("Compositing failed: {}", error);

        // Copying a file onto itself truncates it before anything is read
        if is_same_file(&job.background, &job.output) {
            return Err(PipelineError::FallbackFailed {
                reason: Box::new(error),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "output path refers to the background file",
                ),
            }
            .into());
        }

        warn!("Copying background {:?} to {:?} instead", job.background, job.output);

        match std::fs::copy(&job.background, &job.output) {
            Ok(_) => Ok(CompositeOutcome::FellBack {
                output: job.output.clone(),
                reason: error,
            }),
            Err(source) => Err(PipelineError::FallbackFailed {
                reason: Box::new(error),
                source,
            }
            .into()),
        }
    }
}

/// Whether two paths name the same file once `..`, `.` and symlinks are resolved.
///
/// `output` may not exist yet, in which case its parent directory is resolved
/// and the file name appended.
fn is_same_file(background: &Path, output: &Path) -> bool {
    let Ok(background) = std::fs::canonicalize(background) else {
        return false;
    };

    let output = match std::fs::canonicalize(output) {
        Ok(path) => path,
        Err(_) => {
            let parent = match output.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            match (std::fs::canonicalize(parent), output.file_name()) {
                (Ok(parent), Some(name)) => parent.join(name),
                _ => return false,
            }
        }
    };

    background == output
}
