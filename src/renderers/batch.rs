//! Batch initialization of skill trees
//!
//! Turns a list of descriptors into one render task per descriptor. Each
//! render is started when it is issued; tasks do not wait on each other and
//! completion order across a batch is unspecified.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::errors::{Result, SkillTreeError};
use crate::models::SkillTreeDescriptor;

use super::{Page, PanZoom, RenderEngine, SkillTreeRenderer};

/// An issued inline render for one batch entry
pub struct RenderTask {
    container_id: Option<String>,
    future: LocalBoxFuture<'static, Result<()>>,
}

impl RenderTask {
    /// Task for an entry that could not be read; it resolves to `error`
    pub fn rejected(error: SkillTreeError) -> Self {
        Self {
            container_id: None,
            future: future::ready(Err(error)).boxed_local(),
        }
    }

    /// Id of the container this task renders into, if the entry had one
    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }
}

impl Future for RenderTask {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

impl std::fmt::Debug for RenderTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTask")
            .field("container_id", &self.container_id)
            .finish_non_exhaustive()
    }
}

impl<P, R, Z> SkillTreeRenderer<P, R, Z>
where
    P: Page + 'static,
    P::Element: 'static,
    R: RenderEngine<P::Element>,
    Z: PanZoom<P::Element> + 'static,
{
    /// Issue one inline render per descriptor, in the order given.
    ///
    /// Every render has been handed to the engine by the time this returns;
    /// the tasks only finish lookup, append and attach.
    pub fn issue_batch(&self, descriptors: &[SkillTreeDescriptor]) -> Vec<RenderTask> {
        log::info!("Issuing {} skill tree render(s)", descriptors.len());
        descriptors.iter().map(|d| self.issue_descriptor(d)).collect()
    }

    /// Like [`issue_batch`](Self::issue_batch) for entries that may have
    /// failed to parse. A bad entry becomes a rejected task in its own slot;
    /// the other entries render normally.
    pub fn issue_entries<I>(&self, entries: I) -> Vec<RenderTask>
    where
        I: IntoIterator<Item = Result<SkillTreeDescriptor>>,
    {
        let tasks: Vec<RenderTask> = entries
            .into_iter()
            .map(|entry| match entry {
                Ok(descriptor) => self.issue_descriptor(&descriptor),
                Err(error) => RenderTask::rejected(error),
            })
            .collect();
        log::info!("Issued {} skill tree render(s)", tasks.len());
        tasks
    }

    fn issue_descriptor(&self, descriptor: &SkillTreeDescriptor) -> RenderTask {
        RenderTask {
            container_id: Some(descriptor.id.clone()),
            future: self.issue_inline_render(&descriptor.id, descriptor.dot_text()),
        }
    }
}
