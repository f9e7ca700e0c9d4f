use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Directory holding the shared puzzle inputs.
pub const PUZZLES_DIR: &str = "puzzles";
/// Token replaced by the day number in the template.
pub const DAY_TOKEN: &str = "{{DAY_NUM}}";
pub const DEFAULT_TEMPLATE: &str = "template.rs_";
pub const UTILS_CRATE: &str = "utils";
/// Where `utils` lives, relative to a day project.
pub const UTILS_PATH: &str = "../utils";
/// Number of example inputs seeded per day.
pub const TEST_INPUTS: u32 = 2;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(u64);

impl Day {
    pub const FIRST: Day = Day(1);

    pub fn new(number: u64) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    pub fn dir_name(&self) -> String {
        format!("day{}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "day{}", self.0)
    }
}

/// Every path the scaffolder touches, rooted at the workspace.
///
/// Input paths follow what the `utils` loaders expect: `load_puzzle_data`
/// reads `puzzles/day<N>.txt` and `load_puzzle_test` reads
/// `../puzzles/day<N>_test<k>.txt` from inside the day project.
#[derive(Clone, Debug)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn puzzles_dir(&self) -> PathBuf {
        self.root.join(PUZZLES_DIR)
    }

    pub fn input_file(&self, day: Day) -> PathBuf {
        self.puzzles_dir().join(format!("{}.txt", day))
    }

    pub fn test_file(&self, day: Day, test_number: u32) -> PathBuf {
        self.puzzles_dir()
            .join(format!("{}_test{}.txt", day, test_number))
    }

    pub fn project_dir(&self, day: Day) -> PathBuf {
        self.root.join(day.dir_name())
    }

    pub fn project_puzzle(&self, day: Day) -> PathBuf {
        self.project_dir(day).join("puzzle.txt")
    }

    pub fn main_source(&self, day: Day) -> PathBuf {
        self.project_dir(day).join("src").join("main.rs")
    }

    /// Placeholder files in creation order.
    pub fn placeholders(&self, day: Day) -> Vec<PathBuf> {
        let mut files = vec![self.input_file(day)];
        files.extend((1..=TEST_INPUTS).map(|n| self.test_file(day, n)));
        files.push(self.project_puzzle(day));
        files
    }

    /// Resolves a user supplied path against the root unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
