//! Upward propagation of dependents along support chains.

use std::collections::HashSet;

use log::trace;

use loadpath_core::element::ElementId;

use crate::{error::LoadpathError, structure::ElementCache};

/// Pushes "elements depending on X" up to everything X rests on, directly or
/// through intermediates.
///
/// Every call walks the support relation upward from one element. The walk
/// keeps the current path to detect support cycles and a finished set so that
/// supporters reachable along several paths are visited once.
pub(crate) struct DependencyPropagator<'a, S> {
    cache: &'a mut ElementCache<S>,
    path: Vec<ElementId>,
    finished: HashSet<ElementId>,
}

impl<'a, S> DependencyPropagator<'a, S> {
    pub(crate) fn new(cache: &'a mut ElementCache<S>) -> Self {
        Self {
            cache,
            path: Vec::new(),
            finished: HashSet::new(),
        }
    }

    /// Unions `dependents` into the non-direct dependents of every element
    /// `origin` rests on, transitively.
    ///
    /// # Errors
    ///
    /// Returns [`LoadpathError::StructuralCycle`] if the walk returns to an
    /// element already on the current path. The cycle is reported starting and
    /// ending at that element.
    pub(crate) fn propagate(&mut self, origin: ElementId, dependents: &[ElementId]) -> Result<(), LoadpathError> {
        self.path.clear();
        self.finished.clear();
        if dependents.is_empty() {
            return Ok(());
        }
        trace!(origin:%, dependents_count = dependents.len(); "Propagating dependents");
        self.visit(origin, dependents)
    }

    fn visit(&mut self, id: ElementId, dependents: &[ElementId]) -> Result<(), LoadpathError> {
        self.path.push(id);

        for supporter in self.cache.node(id)?.supported_by_ids() {
            if let Some(start) = self.path.iter().position(|&on_path| on_path == supporter) {
                let mut cycle = self.path[start..].to_vec();
                cycle.push(supporter);
                return Err(LoadpathError::StructuralCycle { cycle });
            }
            if self.finished.contains(&supporter) {
                continue;
            }

            self.cache
                .node_mut(supporter)?
                .add_non_direct_dependents(dependents.iter().copied());
            self.visit(supporter, dependents)?;
        }

        self.path.pop();
        self.finished.insert(id);
        Ok(())
    }
}
