//! Broken link repair for markdown pages
//!
//! A link target is "broken" when it names a local path that does not exist
//! relative to the file containing it. Such targets are repaired by looking
//! for a file with the same name among the scanned files and picking the one
//! closest to the linking file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::ops::Range;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LINK_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*?)\]: (.*)").expect("link reference pattern"));
static INLINE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\((.*?)\)").expect("inline link pattern"));

#[derive(Debug, Error)]
pub enum FixlinksError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scanned files grouped by file name
#[derive(Debug, Default)]
pub struct FilenameIndex {
    by_name: BTreeMap<String, Vec<Utf8PathBuf>>,
}

impl FilenameIndex {
    pub fn new(files: &[Utf8PathBuf]) -> Self {
        let mut by_name: BTreeMap<String, Vec<Utf8PathBuf>> = BTreeMap::new();
        for file in files {
            if let Some(name) = file.file_name() {
                by_name.entry(name.to_owned()).or_default().push(file.clone());
            }
        }
        Self { by_name }
    }

    pub fn candidates(&self, name: &str) -> Option<&[Utf8PathBuf]> {
        self.by_name.get(name).map(Vec::as_slice)
    }

    /// File names shared by more than one scanned file
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[Utf8PathBuf])> {
        self.by_name
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }
}

/// Running totals over every link seen
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkCounts {
    /// Link targets seen
    pub urls: usize,
    /// Targets that are local paths
    pub paths: usize,
    /// Local paths that do not exist
    pub missing: usize,
    /// Missing paths with at least one same-named candidate
    pub matches: usize,
    /// Missing paths with several same-named candidates
    pub ambiguous: usize,
    /// Missing paths whose best candidates scored equally
    pub ties: usize,
}

/// A link target inside a file, as a byte range into its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub line_no: usize,
    pub range: Range<usize>,
}

/// Every link target in `contents`, ordered by position.
///
/// Reference definitions (`[label]: target`) come first in the scan; inline
/// links (`[text](target)`) whose target is one of those labels are skipped.
pub fn find_link_targets(contents: &str) -> Vec<LinkTarget> {
    let mut labels = BTreeSet::new();
    let mut targets = Vec::new();

    for (line_no, start, line) in lines_with_offsets(contents) {
        for cap in LINK_REFERENCE.captures_iter(line) {
            if let (Some(label), Some(target)) = (cap.get(1), cap.get(2)) {
                labels.insert(label.as_str());
                targets.push(LinkTarget {
                    line_no,
                    range: start + target.start()..start + target.end(),
                });
            }
        }
    }

    for (line_no, start, line) in lines_with_offsets(contents) {
        for cap in INLINE_LINK.captures_iter(line) {
            if let Some(target) = cap.get(2) {
                if !labels.contains(target.as_str()) {
                    targets.push(LinkTarget {
                        line_no,
                        range: start + target.start()..start + target.end(),
                    });
                }
            }
        }
    }

    targets.sort_by_key(|t| t.range.start);
    targets
}

/// (1-based line number, byte offset of line start, line without terminator)
fn lines_with_offsets(contents: &str) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
    let mut offset = 0;
    contents.split_inclusive('\n').enumerate().map(move |(idx, raw)| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        (idx + 1, start, line)
    })
}

/// Closeness of a relative path: each component counts once, each leading
/// `..` three times, so candidates in or under the same directory win.
pub fn path_score(relative: &Utf8Path) -> usize {
    let parents = relative
        .components()
        .take_while(|c| *c == Utf8Component::ParentDir)
        .count();
    relative.components().count() + parents * 2
}

/// Best candidate relative to `dir`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub path: String,
    /// Other candidates with the same best score
    pub ties: usize,
}

/// Pick the lowest-scoring candidate; on a tie the earliest one is kept.
pub fn rank_candidates(dir: &Utf8Path, candidates: &[Utf8PathBuf]) -> Option<RankedCandidate> {
    let mut best: Option<(usize, Utf8PathBuf)> = None;
    let mut ties = 0;

    for candidate in candidates {
        let Some(relative) = pathdiff::diff_utf8_paths(candidate, dir) else {
            continue;
        };
        let score = path_score(&relative);
        let best_score = best.as_ref().map(|(s, _)| *s);
        match best_score {
            Some(s) if score > s => {}
            Some(s) if score == s => ties += 1,
            _ => {
                best = Some((score, relative));
                ties = 0;
            }
        }
    }

    best.map(|(_, path)| RankedCandidate {
        path: path.into_string(),
        ties,
    })
}

/// Rewrites broken links across a set of files
#[derive(Debug)]
pub struct LinkFixer {
    index: FilenameIndex,
    counts: LinkCounts,
}

impl LinkFixer {
    pub fn new(files: &[Utf8PathBuf]) -> Self {
        Self {
            index: FilenameIndex::new(files),
            counts: LinkCounts::default(),
        }
    }

    pub fn index(&self) -> &FilenameIndex {
        &self.index
    }

    pub fn counts(&self) -> &LinkCounts {
        &self.counts
    }

    /// Repair `file` in place (or only report when `write` is false).
    ///
    /// Returns whether any link was replaced.
    pub fn fix_file(&mut self, file: &Utf8Path, write: bool) -> Result<bool, FixlinksError> {
        let contents = fs::read_to_string(file).map_err(|source| FixlinksError::Read {
            path: file.to_owned(),
            source,
        })?;

        let Some(modified) = self.fix_contents(file, &contents) else {
            return Ok(false);
        };

        if write {
            fs::write(file, modified).map_err(|source| FixlinksError::Write {
                path: file.to_owned(),
                source,
            })?;
        }
        Ok(true)
    }

    /// Contents of `file` with broken links replaced, or `None` if nothing
    /// needed replacing.
    pub fn fix_contents(&mut self, file: &Utf8Path, contents: &str) -> Option<String> {
        let mut modified = String::new();
        let mut written = 0;
        let mut changed = false;

        for target in find_link_targets(contents) {
            // Overlaps a target that was already replaced
            if target.range.start < written {
                continue;
            }
            let Some(replacement) = self.check_target(file, target.line_no, &contents[target.range.clone()]) else {
                continue;
            };
            modified.push_str(&contents[written..target.range.start]);
            modified.push_str(&replacement);
            written = target.range.end;
            changed = true;
        }

        if !changed {
            return None;
        }
        modified.push_str(&contents[written..]);
        Some(modified)
    }

    fn check_target(&mut self, file: &Utf8Path, line_no: usize, target: &str) -> Option<String> {
        self.counts.urls += 1;
        if target.starts_with("http:") || target.starts_with("https:") || target.starts_with('#') {
            return None;
        }
        let (path, fragment) = match target.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (target, None),
        };

        self.counts.paths += 1;

        let dir = file.parent().unwrap_or_else(|| Utf8Path::new(""));
        let resolved = dir.join(path);
        if resolved.exists() {
            return None;
        }
        self.counts.missing += 1;

        let Some(candidates) = resolved.file_name().and_then(|name| self.index.candidates(name)) else {
            log::warn!("Unable to resolve at {}:{}: {}", file, line_no, path);
            return None;
        };
        self.counts.matches += 1;
        if candidates.len() > 1 {
            self.counts.ambiguous += 1;
        }

        let ranked = rank_candidates(dir, candidates)?;
        if ranked.ties > 0 {
            self.counts.ties += 1;
        }

        // mdBook does not resolve bare file names
        let mut replacement = ranked.path;
        if !replacement.starts_with("../") {
            replacement.insert_str(0, "./");
        }
        if let Some(fragment) = fragment {
            replacement.push('#');
            replacement.push_str(fragment);
        }

        log::debug!("{}:{}: {} -> {}", file, line_no, target, replacement);
        Some(replacement)
    }
}
