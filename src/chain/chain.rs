use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

use super::context::RequestContext;
use super::plugin::GatewayPlugin;
use crate::Result;

/// Executes an ordered, skippable sequence of plugins over one request.
///
/// The plugin sequence is an immutable snapshot shared by reference; the
/// cursor travels by value with each invocation, so concurrent requests
/// interleave freely without any locking. A continuation handed to a
/// plugin always resumes at exactly the next cursor: no plugin runs twice
/// for one request, and cursors strictly increase.
///
/// Cancellation is implicit: dropping the execute future simply never
/// invokes the pending continuation. Resource release for work already
/// started is each plugin's own responsibility.
#[derive(Clone)]
pub struct PluginChain {
    plugins: Arc<Vec<Arc<dyn GatewayPlugin>>>,
    cursor: usize,
}

impl PluginChain {
    /// Chain positioned at the first plugin of `plugins`.
    pub fn new(plugins: Arc<Vec<Arc<dyn GatewayPlugin>>>) -> Self {
        Self { plugins, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.plugins.len() - self.cursor
    }

    /// Run the chain from the current cursor to completion.
    ///
    /// Skipped plugins advance the cursor without an `execute` call; the
    /// first non-skipped plugin receives the request and the continuation
    /// bound to the position after it. Reaching the end of the sequence
    /// completes successfully.
    pub fn execute<'a>(
        mut self,
        ctx: &'a mut RequestContext,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            while self.cursor < self.plugins.len() {
                let plugin = Arc::clone(&self.plugins[self.cursor]);
                self.cursor += 1;

                if plugin.skip(ctx) {
                    debug!(
                        request_id = %ctx.request_id,
                        plugin = plugin.name(),
                        "plugin skipped"
                    );
                    continue;
                }

                let next = Self {
                    plugins: Arc::clone(&self.plugins),
                    cursor: self.cursor,
                };
                return plugin.execute(ctx, next).await;
            }
            Ok(())
        }
        .boxed()
    }
}
