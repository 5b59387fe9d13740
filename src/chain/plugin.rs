use async_trait::async_trait;

use super::chain::PluginChain;
use super::context::RequestContext;
use crate::Result;

/// One composable unit of request processing.
///
/// The chain engine only orchestrates: it evaluates [`skip`](Self::skip),
/// then hands the request and a continuation to
/// [`execute`](Self::execute). The plugin decides whether to invoke the
/// continuation zero (short-circuit) or one times, may transform the
/// request context before and/or after invoking it, and may perform
/// arbitrary asynchronous work around that call. Timeouts for a plugin's
/// own work are the plugin's responsibility.
#[async_trait]
pub trait GatewayPlugin: Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Pure, side-effect-free predicate over the request context. When it
    /// returns true the engine advances past this plugin without invoking
    /// [`execute`](Self::execute).
    fn skip(
        &self,
        _ctx: &RequestContext,
    ) -> bool {
        false
    }

    /// Process the request. `chain` is the continuation bound to the next
    /// position; not invoking it terminates the chain for this request.
    async fn execute(
        &self,
        ctx: &mut RequestContext,
        chain: PluginChain,
    ) -> Result<()>;
}
