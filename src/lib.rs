mod clock;
mod config;
pub mod handler;
mod post;
mod poster;
mod runtime;
mod schedule;
mod transport;

pub use config::Config;
pub use poster::Poster;
pub use runtime::BotRuntime;
pub use schedule::Scheduler;
pub use transport::{ChannelTransport, Transport};
