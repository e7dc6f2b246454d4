use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Hands a URL to the platform's default browser. Fire-and-forget: the core
/// never learns whether the browser actually opened.
#[derive(Clone)]
pub struct ExternalLink<Ev> {
    context: CapabilityContext<LinkOperation, Ev>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkOperation {
    Open { url: String },
}

impl Operation for LinkOperation {
    type Output = ();
}

impl<Ev> ExternalLink<Ev>
where
    Ev: 'static,
{
    #[must_use]
    pub fn new(context: CapabilityContext<LinkOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn open(&self, url: impl Into<String>) {
        let context = self.context.clone();
        let url = url.into();
        self.context.spawn(async move {
            context.notify_shell(LinkOperation::Open { url }).await;
        });
    }
}

impl<Ev> Capability<Ev> for ExternalLink<Ev> {
    type Operation = LinkOperation;
    type MappedSelf<MappedEv> = ExternalLink<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        ExternalLink::new(self.context.map_event(f))
    }
}
