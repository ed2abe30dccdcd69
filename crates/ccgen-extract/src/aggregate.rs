//! Cross-file aggregation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ccgen_core::{CollisionPolicy, HeaderUnit, SymbolTable};
use ccgen_parser::{HeaderParser, ParserError};
use rayon::prelude::*;

use crate::classes::collect_class;
use crate::collected::CollectedSymbols;
use crate::enums::collect_enum;
use crate::error::ExtractError;
use crate::paths::normalize_path;
use crate::resolve::{ResolveOptions, correct_parent_names};
use crate::session::{Diagnostic, ExtractionSession, SymbolKind};

/// Aggregation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub on_collision: CollisionPolicy,
    pub resolve: ResolveOptions,
}

/// Collect every top-level class and enum of one parsed file.
pub fn collect_unit(session: &mut ExtractionSession, unit: &HeaderUnit) -> CollectedSymbols {
    let mut collected = CollectedSymbols::default();
    for class in &unit.classes {
        collected.merge(collect_class(session, class, ""));
    }
    for record in &unit.enums {
        if let Some(entry) = collect_enum(session, record, "") {
            collected.enums.insert(entry.name.clone(), entry);
        }
    }
    collected
}

/// Builds the resolved [`SymbolTable`] for a set of input files.
#[derive(Debug)]
pub struct SourceCollector<'p, P: HeaderParser> {
    parser: &'p P,
    options: ExtractOptions,
}

impl<'p, P: HeaderParser> SourceCollector<'p, P> {
    pub const fn new(parser: &'p P, options: ExtractOptions) -> Self {
        Self { parser, options }
    }

    /// Parse, collect, merge and resolve `inputs`.
    ///
    /// Files are parsed in parallel; results are merged in input order, so a
    /// later file wins a name collision under [`CollisionPolicy::Overwrite`].
    ///
    /// # Errors
    /// [`ExtractError::NoInputFiles`] for an empty input list, the first
    /// failing file's [`ExtractError::Parse`], or
    /// [`ExtractError::NameCollision`] under [`CollisionPolicy::Error`].
    pub fn collect(
        &self,
        session: &mut ExtractionSession,
        inputs: &[PathBuf],
    ) -> Result<SymbolTable, ExtractError> {
        if inputs.is_empty() {
            return Err(ExtractError::NoInputFiles);
        }
        let start = Instant::now();
        let paths: Vec<PathBuf> = inputs.iter().map(|p| normalize_path(p)).collect();

        let parsed: Vec<Result<HeaderUnit, ParserError>> = paths
            .par_iter()
            .map(|path| self.parser.parse_file(path))
            .collect();

        let mut merge = Merge::default();
        for (path, unit) in paths.iter().zip(parsed) {
            let unit = unit?;
            session.enter_file(path);
            let collected = collect_unit(session, &unit);
            session.leave_file();
            self.merge_file(session, &mut merge, path, collected)?;
        }

        correct_parent_names(session, &mut merge.table.classes, self.options.resolve);
        tracing::info!(
            files = merge.table.files.len(),
            classes = merge.table.classes.len(),
            enums = merge.table.enums.len(),
            "collected source information in {}s",
            start.elapsed().as_secs_f64()
        );
        Ok(merge.table)
    }

    fn merge_file(
        &self,
        session: &mut ExtractionSession,
        merge: &mut Merge,
        path: &Path,
        collected: CollectedSymbols,
    ) -> Result<(), ExtractError> {
        if collected.is_empty() {
            tracing::debug!("{} exports nothing", path.display());
            return Ok(());
        }
        merge.table.files.push(path.to_path_buf());

        for (name, entry) in collected.classes {
            self.claim(session, &mut merge.class_origins, SymbolKind::Class, &name, path)?;
            merge.table.classes.insert(name, entry);
        }
        for (name, entry) in collected.enums {
            self.claim(session, &mut merge.enum_origins, SymbolKind::Enum, &name, path)?;
            merge.table.enums.insert(name, entry);
        }
        Ok(())
    }

    /// Record `path` as the origin of `name`, applying the collision policy
    /// when another file exported it first.
    fn claim(
        &self,
        session: &mut ExtractionSession,
        origins: &mut BTreeMap<String, PathBuf>,
        kind: SymbolKind,
        name: &str,
        path: &Path,
    ) -> Result<(), ExtractError> {
        let Some(previous) = origins.insert(name.to_string(), path.to_path_buf()) else {
            return Ok(());
        };
        if previous == path {
            return Ok(());
        }
        match self.options.on_collision {
            CollisionPolicy::Overwrite => {
                session.report(Diagnostic::NameCollision {
                    kind,
                    name: name.to_string(),
                    previous,
                    file: path.to_path_buf(),
                });
                Ok(())
            }
            CollisionPolicy::Error => Err(ExtractError::NameCollision {
                kind,
                name: name.to_string(),
                first: previous,
                second: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Default)]
struct Merge {
    table: SymbolTable,
    class_origins: BTreeMap<String, PathBuf>,
    enum_origins: BTreeMap<String, PathBuf>,
}
