//! One invocation, end to end.
//!
//! ```text
//! scope ─→ destination ─→ for each directory argument:
//!                            [slideshow: ask timing]
//!                            scan → report rejects → render → write → report
//! ```
//!
//! The scope is settled and the destination resolved before anything is
//! scanned, so a missing privilege fails fast. Directories are then handled
//! one after another; a fatal error stops the run but leaves descriptors
//! already written for earlier directories in place.

use crate::config::{Config, ConfigError};
use crate::destination::{self, Destination, DestinationError};
use crate::generate;
use crate::naming;
use crate::output;
use crate::prompt::{PromptError, Prompter};
use crate::scan::{self, ScanError};
use crate::timing;
use crate::types::{DocumentKind, Scope};
use crate::writer::{self, WriteError};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please pass at least one directory name")]
    NoDirectories,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Destination(#[from] DestinationError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What the user asked for on the command line.
#[derive(Debug, Clone)]
pub struct Request {
    pub kind: DocumentKind,
    pub directories: Vec<PathBuf>,
    /// Pre-answered scope; asked interactively when `None`.
    pub scope: Option<Scope>,
}

/// Facts about the running process that the pipeline depends on.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Anchor for relative directory arguments.
    pub cwd: PathBuf,
    pub is_superuser: bool,
}

impl Environment {
    pub fn current() -> io::Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir()?,
            is_superuser: destination::running_as_superuser(),
        })
    }
}

/// A descriptor written during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    pub path: PathBuf,
    pub image_count: usize,
}

/// Run the whole pipeline for `request`.
pub fn run<R: BufRead, W: Write, G: Rng>(
    request: &Request,
    config: &Config,
    env: &Environment,
    prompter: &mut Prompter<R, W>,
    rng: &mut G,
) -> Result<Vec<WrittenDocument>, AppError> {
    if request.directories.is_empty() {
        return Err(AppError::NoDirectories);
    }

    let scope = match request.scope {
        Some(scope) => scope,
        None => destination::ask_scope(prompter)?,
    };
    let destination = destination::resolve(config, request.kind, scope, env.is_superuser)?;

    let (valid, invalid) = scan::partition_directories(&request.directories, &env.cwd);
    prompter.say(&output::format_invalid_directories(&invalid))?;

    let mut written = Vec::with_capacity(valid.len());
    for dir in &valid {
        let document = process_directory(dir, request.kind, config, env, &destination, prompter, rng)?;
        written.push(document);
    }

    if request.kind == DocumentKind::Slideshow && !written.is_empty() {
        prompter.say(&output::format_slideshow_guidance())?;
    }

    log::info!("wrote {} {} descriptor(s)", written.len(), request.kind);
    Ok(written)
}

fn process_directory<R: BufRead, W: Write, G: Rng>(
    dir: &Path,
    kind: DocumentKind,
    config: &Config,
    env: &Environment,
    destination: &Destination,
    prompter: &mut Prompter<R, W>,
    rng: &mut G,
) -> Result<WrittenDocument, AppError> {
    let timing = match kind {
        DocumentKind::Slideshow => {
            prompter.say(&output::format_slideshow_banner(dir))?;
            Some(timing::ask_timing(prompter)?)
        }
        DocumentKind::Wallpapers => None,
    };

    let scanned = scan::scan_directory(dir, &env.cwd)?;
    prompter.say(&output::format_rejected_files(&scanned.name, &scanned.rejected))?;

    let content = match timing {
        Some(timing) => generate::slideshow_document(&scanned.images, &timing, rng),
        None => generate::wallpapers_document(&scanned.images, &config.wallpapers),
    };

    let path = destination.file_path(&scanned.name);
    writer::write_document(&path, &content, prompter)?;

    let file_name = naming::document_file_name(&scanned.name, kind);
    prompter.say(&[output::format_created(
        &file_name,
        &destination.dir,
        scanned.images.len(),
    )])?;

    Ok(WrittenDocument {
        path,
        image_count: scanned.images.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{JPEG_HEADER, PNG_HEADER, image_dir, scripted, transcript};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    /// Config whose every destination lives inside `out`.
    fn config_into(out: &Path) -> Config {
        let mut config = Config::default();
        let dir = out.to_string_lossy().into_owned();
        config.wallpapers.local_dir = dir.clone();
        config.wallpapers.global_dir = dir.clone();
        config.slideshow.local_dir = dir.clone();
        config.slideshow.global_dir = dir;
        config
    }

    fn env_at(cwd: &Path, is_superuser: bool) -> Environment {
        Environment {
            cwd: cwd.to_path_buf(),
            is_superuser,
        }
    }

    fn request(kind: DocumentKind, dirs: &[&Path], scope: Option<Scope>) -> Request {
        Request {
            kind,
            directories: dirs.iter().map(|d| d.to_path_buf()).collect(),
            scope,
        }
    }

    fn photos_dir(root: &Path) -> PathBuf {
        let photos = root.join("photos");
        fs::create_dir(&photos).unwrap();
        fs::write(photos.join("a.jpg"), JPEG_HEADER).unwrap();
        fs::write(photos.join("b.png"), PNG_HEADER).unwrap();
        fs::write(photos.join("notes.txt"), "not an image").unwrap();
        photos
    }

    #[test]
    fn wallpapers_for_mixed_directory() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let mut p = scripted(&["L"]);
        let mut rng = StdRng::seed_from_u64(0);

        let written = run(
            &request(DocumentKind::Wallpapers, &[photos.as_path()], None),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        )
        .unwrap();

        let target = out.path().join("photos-wallpapers.xml");
        assert_eq!(
            written,
            vec![WrittenDocument {
                path: target.clone(),
                image_count: 2
            }]
        );

        let xml = fs::read_to_string(&target).unwrap();
        assert_eq!(xml.matches("<wallpaper>").count(), 2);
        assert!(xml.contains("<name>a</name>"));
        assert!(xml.contains("<name>b</name>"));
        assert!(xml.contains(&format!("<filename>{}</filename>", photos.join("a.jpg").display())));
        assert!(!xml.contains("notes"));

        let log = transcript(&mut p);
        assert!(log.contains("In directory photos, these files are not images and will be ignored:"));
        assert!(log.contains("  notes.txt"));
        assert!(log.contains("photos-wallpapers.xml is created at"));
        assert!(log.contains("with 2 image(s)"));
    }

    #[test]
    fn relative_directory_resolved_against_cwd() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let mut p = scripted(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        run(
            &request(DocumentKind::Wallpapers, &[Path::new("photos")], Some(Scope::Local)),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        )
        .unwrap();

        let xml = fs::read_to_string(out.path().join("photos-wallpapers.xml")).unwrap();
        assert!(xml.contains(&photos.join("b.png").display().to_string()));
    }

    #[test]
    fn empty_directory_writes_empty_document() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let empty = src.path().join("empty");
        fs::create_dir(&empty).unwrap();
        let mut p = scripted(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        let written = run(
            &request(DocumentKind::Wallpapers, &[empty.as_path()], Some(Scope::Local)),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        )
        .unwrap();

        assert_eq!(written[0].image_count, 0);
        let xml = fs::read_to_string(&written[0].path).unwrap();
        assert!(xml.ends_with("<wallpapers>\n</wallpapers>"));
        assert!(transcript(&mut p).contains("with 0 image(s)"));
    }

    #[test]
    fn slideshow_asks_timing_per_directory() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let first = image_dir(&[("x.png", PNG_HEADER), ("y.png", PNG_HEADER)]);
        let second = image_dir(&[("z.jpg", JPEG_HEADER)]);
        // first: fixed 60s, 2s transition; second: random 10-20s, 1s transition
        let mut p = scripted(&["2", "60", "2", "1", "10", "20", "1"]);
        let mut rng = StdRng::seed_from_u64(5);

        let written = run(
            &request(
                DocumentKind::Slideshow,
                &[first.path(), second.path()],
                Some(Scope::Local),
            ),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0].image_count, 2);
        assert_eq!(written[1].image_count, 1);

        let first_xml = fs::read_to_string(&written[0].path).unwrap();
        assert_eq!(first_xml.matches("<duration>60.00</duration>").count(), 2);
        assert_eq!(first_xml.matches("<duration>2.00</duration>").count(), 2);
        assert!(written[0].path.to_string_lossy().ends_with("-slideshow.xml"));

        let second_xml = fs::read_to_string(&written[1].path).unwrap();
        assert_eq!(second_xml.matches("<static>").count(), 1);
        assert_eq!(second_xml.matches("<duration>1.00</duration>").count(), 1);

        assert!(transcript(&mut p).contains("GNOME Tweaks"));
    }

    #[test]
    fn invalid_arguments_reported_and_skipped() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let missing = src.path().join("missing");
        let mut p = scripted(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        let written = run(
            &request(
                DocumentKind::Wallpapers,
                &[missing.as_path(), photos.as_path()],
                Some(Scope::Local),
            ),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        )
        .unwrap();

        assert_eq!(written.len(), 1);
        let log = transcript(&mut p);
        assert!(log.contains("The following arguments are not directories and will be ignored:"));
        assert!(log.contains(&format!("  {}", missing.display())));
    }

    #[test]
    fn no_directories_is_error() {
        let out = TempDir::new().unwrap();
        let mut p = scripted(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(
            &request(DocumentKind::Wallpapers, &[], Some(Scope::Local)),
            &config_into(out.path()),
            &env_at(out.path(), false),
            &mut p,
            &mut rng,
        );
        assert!(matches!(result, Err(AppError::NoDirectories)));
    }

    #[test]
    fn global_without_privilege_fails_before_scanning() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let mut p = scripted(&["G"]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(
            &request(DocumentKind::Wallpapers, &[photos.as_path()], None),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        );

        assert!(matches!(
            result,
            Err(AppError::Destination(DestinationError::NotSuperuser(_)))
        ));
        assert!(!transcript(&mut p).contains("not images"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn global_with_privilege_writes() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let mut p = scripted(&["global"]);
        let mut rng = StdRng::seed_from_u64(0);

        let written = run(
            &request(DocumentKind::Wallpapers, &[photos.as_path()], None),
            &config_into(out.path()),
            &env_at(src.path(), true),
            &mut p,
            &mut rng,
        )
        .unwrap();
        assert!(written[0].path.starts_with(out.path()));
    }

    #[test]
    fn declined_overwrite_aborts_and_keeps_file() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let photos = photos_dir(src.path());
        let target = out.path().join("photos-wallpapers.xml");
        fs::write(&target, "previous descriptor").unwrap();
        let mut p = scripted(&["L", "no"]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(
            &request(DocumentKind::Wallpapers, &[photos.as_path()], None),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        );

        assert!(matches!(
            result,
            Err(AppError::Write(WriteError::Declined(_)))
        ));
        assert_eq!(fs::read_to_string(&target).unwrap(), "previous descriptor");
    }

    #[test]
    fn abort_keeps_earlier_directories_written() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let first = src.path().join("first");
        let second = src.path().join("second");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();
        fs::write(first.join("a.png"), PNG_HEADER).unwrap();
        fs::write(out.path().join("second-wallpapers.xml"), "keep me").unwrap();
        let mut p = scripted(&["n"]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run(
            &request(
                DocumentKind::Wallpapers,
                &[first.as_path(), second.as_path()],
                Some(Scope::Local),
            ),
            &config_into(out.path()),
            &env_at(src.path(), false),
            &mut p,
            &mut rng,
        );

        assert!(result.is_err());
        assert!(out.path().join("first-wallpapers.xml").is_file());
        assert_eq!(
            fs::read_to_string(out.path().join("second-wallpapers.xml")).unwrap(),
            "keep me"
        );
    }
}
