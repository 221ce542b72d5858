mod pushplus;

pub use pushplus::{DispatchConfig, NotificationDispatcher, PushPlusChannel};
