use std::{fs, io, path::Path};

use tracing::debug;

use super::{Day, Result, ScaffoldError, DAY_TOKEN};

/// Template written by `new-day template`.
pub const STARTER: &str = r#"use nom::{
    character::complete::{line_ending, not_line_ending},
    multi::separated_list1,
    IResult,
};

fn parser(s: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(line_ending, not_line_ending)(s)
}

fn solve(lines: &[&str]) -> usize {
    lines.len()
}

fn solve2(lines: &[&str]) -> usize {
    lines.len()
}

fn main() {
    let lines = utils::load_puzzle_data({{DAY_NUM}}, parser);
    println!("Day {{DAY_NUM}} part 1: {}", solve(&lines));
    println!("Day {{DAY_NUM}} part 2: {}", solve2(&lines));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1() {
        let test_data = utils::load_puzzle_test({{DAY_NUM}}, 1, parser);
        assert_eq!(solve(&test_data), 0);
    }

    #[test]
    fn test_part2() {
        let test_data = utils::load_puzzle_test({{DAY_NUM}}, 2, parser);
        assert_eq!(solve2(&test_data), 0);
    }
}
"#;

pub fn render(template: &str, day: Day) -> String {
    template.replace(DAY_TOKEN, &day.number().to_string())
}

pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ScaffoldError::MissingTemplate(path.to_path_buf()),
        _ => ScaffoldError::io(path, err),
    })
}

/// Writes the starter template to `path`, refusing to clobber unless `force`.
pub fn write_starter(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ScaffoldError::TemplateExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    debug!(path = %path.display(), "writing starter template");
    fs::write(path, STARTER).map_err(|e| ScaffoldError::io(path, e))
}
