mod link;
mod store;

pub use self::link::{ExternalLink, LinkOperation};
pub use self::store::{Store, StoreError, StoreOperation, StoreOutput};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::{App, Event};

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub http: Http<Event>,
    pub store: Store<Event>,
    pub link: ExternalLink<Event>,
}
