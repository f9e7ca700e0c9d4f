//! Creating the next `day<N>` project.
//!
//! The whole procedure lives in [`initialize_next_day`]: number the day,
//! provision the project, touch the puzzle inputs and render `main.rs`.

mod error;
mod layout;
mod numbering;
mod provisioner;
mod template;

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

pub use error::{Result, ScaffoldError};
pub use layout::{Day, Layout, DAY_TOKEN, DEFAULT_TEMPLATE, UTILS_CRATE, UTILS_PATH};
pub use numbering::{next_day, Numbering, Policy};
pub use provisioner::{Cargo, Provisioner};
pub use template::{render, write_starter};

#[derive(Clone, Debug)]
pub struct Options {
    pub template: PathBuf,
    pub policy: Policy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            policy: Policy::default(),
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct Scaffold {
    pub numbering: Numbering,
    pub project_dir: PathBuf,
    pub placeholders: Vec<PathBuf>,
    pub main_source: PathBuf,
}

impl Scaffold {
    fn planned(layout: &Layout, numbering: Numbering) -> Self {
        let day = numbering.day;
        Self {
            numbering,
            project_dir: layout.project_dir(day),
            placeholders: layout.placeholders(day),
            main_source: layout.main_source(day),
        }
    }

    pub fn day(&self) -> Day {
        self.numbering.day
    }
}

/// Creates `path` if absent; existing content is kept.
fn touch(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "touching");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|e| ScaffoldError::io(path, e))
}

/// Computes the next day and the files it would produce without touching disk.
pub fn plan(layout: &Layout, options: &Options) -> Result<Scaffold> {
    let numbering = next_day(layout.root(), options.policy)?;
    Ok(Scaffold::planned(layout, numbering))
}

pub fn initialize_next_day<P: Provisioner>(
    layout: &Layout,
    options: &Options,
    provisioner: &P,
) -> Result<Scaffold> {
    let template_path = layout.resolve(&options.template);
    let template = template::load(&template_path)?;

    let numbering = next_day(layout.root(), options.policy)?;
    let day = numbering.day;
    if numbering.fell_back {
        info!("no usable day directories, starting at {}", day);
        let puzzles = layout.puzzles_dir();
        fs::create_dir_all(&puzzles).map_err(|e| ScaffoldError::io(&puzzles, e))?;
    } else {
        info!("next day is {}", day);
    }

    provisioner.create_project(layout.root(), &day.dir_name())?;
    let project_dir = layout.project_dir(day);
    provisioner.add_path_dependency(&project_dir, UTILS_CRATE, Path::new(UTILS_PATH))?;

    let scaffold = Scaffold::planned(layout, numbering);
    for file in &scaffold.placeholders {
        touch(file)?;
    }

    let source = render(&template, day);
    fs::write(&scaffold.main_source, source)
        .map_err(|e| ScaffoldError::io(&scaffold.main_source, e))?;
    info!(path = %scaffold.main_source.display(), "wrote main source");

    Ok(scaffold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records calls and lays out a bare project the way `cargo init` would.
    #[derive(Default)]
    struct FakeProvisioner {
        calls: RefCell<Vec<String>>,
        fail_add: bool,
    }

    impl Provisioner for FakeProvisioner {
        fn create_project(&self, root: &Path, name: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("create {}", name));
            let src = root.join(name).join("src");
            fs::create_dir_all(&src).map_err(|e| ScaffoldError::io(&src, e))
        }

        fn add_path_dependency(
            &self,
            project_dir: &Path,
            dep_name: &str,
            dep_path: &Path,
        ) -> Result<()> {
            let dir = project_dir.file_name().unwrap().to_string_lossy();
            self.calls
                .borrow_mut()
                .push(format!("add {} {} {}", dir, dep_name, dep_path.display()));
            if self.fail_add {
                return Err(ScaffoldError::io(
                    project_dir,
                    std::io::Error::new(std::io::ErrorKind::Other, "boom"),
                ));
            }
            Ok(())
        }
    }

    const TEMPLATE: &str = "fn main() { utils::load_puzzle_data({{DAY_NUM}}, p); }\n// day {{DAY_NUM}}\n";

    fn workspace(dirs: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for d in dirs {
            fs::create_dir_all(dir.path().join(d)).unwrap();
        }
        fs::write(dir.path().join(DEFAULT_TEMPLATE), TEMPLATE).unwrap();
        dir
    }

    fn run(dir: &TempDir, provisioner: &FakeProvisioner) -> Result<Scaffold> {
        initialize_next_day(&Layout::new(dir.path()), &Options::default(), provisioner)
    }

    #[test]
    fn continues_after_highest_day() {
        let dir = workspace(&["day1", "day2", "day4", "puzzles", "utils"]);
        let fake = FakeProvisioner::default();
        let scaffold = run(&dir, &fake).unwrap();

        assert_eq!(scaffold.day(), Day::new(5));
        assert!(!scaffold.numbering.fell_back);
        assert_eq!(
            *fake.calls.borrow(),
            vec!["create day5".to_string(), "add day5 utils ../utils".to_string()]
        );
        for name in [
            "puzzles/day5.txt",
            "puzzles/day5_test1.txt",
            "puzzles/day5_test2.txt",
            "day5/puzzle.txt",
        ] {
            assert!(dir.path().join(name).is_file(), "{} missing", name);
        }
        let source = fs::read_to_string(dir.path().join("day5/src/main.rs")).unwrap();
        assert_eq!(source, TEMPLATE.replace("{{DAY_NUM}}", "5"));
    }

    #[test]
    fn first_day_creates_puzzles_dir() {
        let dir = workspace(&["utils"]);
        let fake = FakeProvisioner::default();
        let scaffold = run(&dir, &fake).unwrap();

        assert_eq!(scaffold.day(), Day::FIRST);
        assert!(scaffold.numbering.fell_back);
        assert!(dir.path().join("puzzles").is_dir());
        assert!(dir.path().join("puzzles/day1.txt").is_file());
        assert!(dir.path().join("day1/puzzle.txt").is_file());
    }

    #[test]
    fn bad_entry_restarts_numbering() {
        let dir = workspace(&["day1", "day2", "dayfoo", "puzzles"]);
        let fake = FakeProvisioner::default();
        let scaffold = run(&dir, &fake).unwrap();
        assert_eq!(scaffold.day(), Day::FIRST);
    }

    #[test]
    fn lenient_policy_ignores_bad_entry() {
        let dir = workspace(&["day1", "day2", "dayfoo", "puzzles"]);
        let fake = FakeProvisioner::default();
        let options = Options {
            policy: Policy::Lenient,
            ..Options::default()
        };
        let scaffold = initialize_next_day(&Layout::new(dir.path()), &options, &fake).unwrap();
        assert_eq!(scaffold.day(), Day::new(3));
    }

    #[test]
    fn placeholders_keep_content_and_source_is_regenerated() {
        // "day_old" resets numbering, so the run lands on the existing day1
        let dir = workspace(&["puzzles", "day1/src", "day_old"]);
        fs::write(dir.path().join("puzzles/day1.txt"), "real input").unwrap();
        fs::write(dir.path().join("day1/puzzle.txt"), "story").unwrap();
        fs::write(dir.path().join("day1/src/main.rs"), "old").unwrap();

        let fake = FakeProvisioner::default();
        let scaffold = run(&dir, &fake).unwrap();
        assert_eq!(scaffold.day(), Day::FIRST);

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("puzzles/day1.txt"), "real input");
        assert_eq!(read("day1/puzzle.txt"), "story");
        assert_eq!(read("puzzles/day1_test1.txt"), "");
        assert_eq!(read("day1/src/main.rs"), TEMPLATE.replace("{{DAY_NUM}}", "1"));
    }

    #[test]
    fn successive_runs_keep_counting() {
        let dir = workspace(&["day3", "puzzles", "utils"]);
        let fake = FakeProvisioner::default();
        assert_eq!(run(&dir, &fake).unwrap().day(), Day::new(4));
        assert_eq!(run(&dir, &fake).unwrap().day(), Day::new(5));
        assert!(dir.path().join("puzzles/day4.txt").is_file());
        assert!(dir.path().join("day5/src/main.rs").is_file());
    }

    #[test]
    fn numbered_run_needs_puzzles_dir() {
        let dir = workspace(&["day1"]);
        let fake = FakeProvisioner::default();
        let err = run(&dir, &fake).unwrap_err();
        let expected = dir.path().join("puzzles").join("day2.txt");
        assert!(matches!(err, ScaffoldError::Io { ref path, .. } if *path == expected));
        assert!(!dir.path().join("puzzles").exists());
    }

    #[test]
    fn missing_template_stops_before_provisioning() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("day1")).unwrap();
        let fake = FakeProvisioner::default();
        let err = run(&dir, &fake).unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplate(_)));
        assert!(fake.calls.borrow().is_empty());
        assert!(!dir.path().join("day2").exists());
    }

    #[test]
    fn provisioner_failure_is_fatal() {
        let dir = workspace(&["day1", "puzzles"]);
        let fake = FakeProvisioner {
            fail_add: true,
            ..FakeProvisioner::default()
        };
        assert!(run(&dir, &fake).is_err());
        assert!(dir.path().join("day2").is_dir());
        assert!(!dir.path().join("puzzles/day2.txt").exists());
    }

    #[test]
    fn plan_touches_nothing() {
        let dir = workspace(&["utils"]);
        let scaffold = plan(&Layout::new(dir.path()), &Options::default()).unwrap();
        assert_eq!(scaffold.day(), Day::FIRST);
        assert_eq!(scaffold.placeholders.len(), 4);
        assert!(!dir.path().join("puzzles").exists());
    }
}
