//! Candidate sources for flag values and free arguments.
//!
//! Any type implementing [`Predictor`] can be attached to a flag or to a
//! command's free arguments. Closures of the shape `Fn(&Args) -> Vec<String>`
//! are predictors too, and so is a whole [`Command`](crate::Command).

use crate::args::Args;
use crate::error::Result;
use crate::matcher::match_file;
use glob::Pattern;
use std::fmt;
use std::fs;
use std::path::Path;

/// Produces raw candidates for the current position in the token stream.
pub trait Predictor: Send + Sync {
    fn predict(&self, args: &Args<'_>) -> Vec<String>;

    /// Whether a flag carrying this predictor consumes the next word.
    fn takes_value(&self) -> bool {
        true
    }
}

impl<F> Predictor for F
where
    F: Fn(&Args<'_>) -> Vec<String> + Send + Sync,
{
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        self(args)
    }
}

/// Predicts nothing.
///
/// Attached to a flag it means the flag takes no value, the same as
/// [`Command::with_flag`](crate::Command::with_flag).
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictNothing;

impl Predictor for PredictNothing {
    fn predict(&self, _args: &Args<'_>) -> Vec<String> {
        Vec::new()
    }

    fn takes_value(&self) -> bool {
        false
    }
}

/// Accepts any value without suggesting one.
///
/// Attached to a flag, it still makes the flag's value position exclusive:
/// no other flag or sub-command is offered after the flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictAnything;

impl Predictor for PredictAnything {
    fn predict(&self, _args: &Args<'_>) -> Vec<String> {
        Vec::new()
    }
}

/// A static list of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictSet(pub Vec<String>);

impl PredictSet {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(options.into_iter().map(Into::into).collect())
    }
}

impl Predictor for PredictSet {
    fn predict(&self, _args: &Args<'_>) -> Vec<String> {
        self.0.clone()
    }
}

/// Union of several predictors.
#[derive(Default)]
pub struct PredictOr(pub Vec<Box<dyn Predictor>>);

impl PredictOr {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn or(mut self, predictor: impl Predictor + 'static) -> Self {
        self.0.push(Box::new(predictor));
        self
    }
}

impl fmt::Debug for PredictOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictOr")
            .field("predictors", &self.0.len())
            .finish()
    }
}

impl Predictor for PredictOr {
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        self.0.iter().flat_map(|p| p.predict(args)).collect()
    }
}

/// A fixed list of paths, matched the way paths are typed.
///
/// Candidates come back with or without a leading `./` to agree with the
/// typed word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictFilesSet(pub Vec<String>);

impl Predictor for PredictFilesSet {
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        let typed = args.being_typed;
        self.0
            .iter()
            .filter(|f| match_file(f, typed))
            .map(|f| typed_form(f, typed))
            .collect()
    }
}

fn typed_form(file: &str, typed: &str) -> String {
    let bare = file.strip_prefix("./").unwrap_or(file);
    if bare.is_empty() {
        file.to_string()
    } else if bare.starts_with(typed) {
        bare.to_string()
    } else {
        format!("./{}", bare)
    }
}

/// Files whose name matches a glob, plus directories to descend into.
#[derive(Debug, Clone)]
pub struct PredictFiles {
    pattern: Pattern,
}

impl PredictFiles {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Predictor for PredictFiles {
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        predict_paths(args.being_typed, &self.pattern, true)
    }
}

/// Directories whose name matches a glob.
#[derive(Debug, Clone)]
pub struct PredictDirs {
    pattern: Pattern,
}

impl PredictDirs {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Predictor for PredictDirs {
    fn predict(&self, args: &Args<'_>) -> Vec<String> {
        predict_paths(args.being_typed, &self.pattern, false)
    }
}

/// Lists paths for `typed`; when exactly one directory matches, lists its
/// contents as well so the shell does not stop at the directory name.
fn predict_paths(typed: &str, pattern: &Pattern, allow_files: bool) -> Vec<String> {
    let found = list_paths(typed, pattern, allow_files);
    match found.as_slice() {
        [only] if only.ends_with('/') && only != typed => {
            list_paths(only, pattern, allow_files)
        }
        _ => found,
    }
}

fn list_paths(typed: &str, pattern: &Pattern, allow_files: bool) -> Vec<String> {
    if typed.ends_with("/..") {
        return Vec::new();
    }

    let prefix = match typed.rfind('/') {
        Some(idx) => &typed[..=idx],
        None => "",
    };
    let dir = if prefix.is_empty() {
        Path::new(".")
    } else {
        Path::new(prefix)
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut paths = Vec::new();
    if !prefix.is_empty() {
        paths.push(prefix.to_string());
    }

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() {
            if allow_files || pattern.matches(&name) {
                paths.push(format!("{}{}/", prefix, name));
            }
        } else if allow_files && pattern.matches(&name) {
            paths.push(format!("{}{}", prefix, name));
        }
    }

    paths.retain(|p| match_file(p, typed));
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CommandLine;
    use std::fs::File;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        File::create(dir.path().join("src").join("main.rs")).unwrap();
        File::create(dir.path().join("src").join("notes.md")).unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        dir
    }

    fn typed_under(root: &TempDir, rel: &str) -> String {
        format!("{}/{}", root.path().display(), rel)
    }

    #[test]
    fn test_predict_set_ignores_typed() {
        let line = CommandLine::parse("cmd --mode x");
        let set = PredictSet::new(["fast", "slow"]);
        assert_eq!(set.predict(&line.args()), vec!["fast", "slow"]);
    }

    #[test]
    fn test_predict_or_unions() {
        let line = CommandLine::parse("cmd ");
        let or = PredictOr::new()
            .or(PredictSet::new(["a"]))
            .or(PredictNothing)
            .or(|_: &Args<'_>| vec!["b".to_string()]);
        assert_eq!(or.predict(&line.args()), vec!["a", "b"]);
    }

    #[test]
    fn test_predict_files_set() {
        let line = CommandLine::parse("cmd ./sr");
        let set = PredictFilesSet(vec!["src/".into(), "./srv".into(), "docs/".into()]);
        assert_eq!(set.predict(&line.args()), vec!["./src/", "./srv"]);

        let line = CommandLine::parse("cmd sr");
        assert_eq!(set.predict(&line.args()), vec!["src/", "srv"]);
    }

    #[test]
    fn test_typed_form() {
        assert_eq!(typed_form("./", ""), "./");
        assert_eq!(typed_form("./x", "."), "./x");
        assert_eq!(typed_form(".hidden", "."), ".hidden");
        assert_eq!(typed_form("a/b", "./a"), "./a/b");
    }

    #[test]
    fn test_only_nothing_declines_a_value() {
        assert!(!PredictNothing.takes_value());
        assert!(PredictAnything.takes_value());
        assert!(PredictSet::new(["a"]).takes_value());
    }

    #[test]
    fn test_predict_files_matches_pattern() {
        let root = fixture();
        let typed = typed_under(&root, "src/");
        let line = CommandLine::parse(&format!("cmd {}", typed));
        let predictor = PredictFiles::new("*.rs").unwrap();
        let got = predictor.predict(&line.args());
        assert!(got.contains(&typed));
        assert!(got.contains(&format!("{}main.rs", typed)));
        assert!(!got.contains(&format!("{}notes.md", typed)));
    }

    #[test]
    fn test_predict_files_descends_single_directory() {
        let root = fixture();
        let typed = typed_under(&root, "sr");
        let line = CommandLine::parse(&format!("cmd {}", typed));
        let predictor = PredictFiles::new("*").unwrap();
        let got = predictor.predict(&line.args());
        let src = typed_under(&root, "src/");
        assert!(got.contains(&src));
        assert!(got.contains(&format!("{}main.rs", src)));
        assert!(got.contains(&format!("{}notes.md", src)));
    }

    #[test]
    fn test_predict_dirs_skips_files() {
        let root = fixture();
        let typed = typed_under(&root, "");
        let line = CommandLine::parse(&format!("cmd {}", typed));
        let predictor = PredictDirs::new("*").unwrap();
        let got = predictor.predict(&line.args());
        assert!(got.contains(&typed_under(&root, "src/")));
        assert!(got.contains(&typed_under(&root, "docs/")));
        assert!(!got.contains(&typed_under(&root, "readme.md")));
    }

    #[test]
    fn test_parent_reference_predicts_nothing() {
        let line = CommandLine::parse("cmd src/..");
        let predictor = PredictFiles::new("*").unwrap();
        assert!(predictor.predict(&line.args()).is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(PredictFiles::new("[").is_err());
        assert!(PredictDirs::new("[").is_err());
    }
}
