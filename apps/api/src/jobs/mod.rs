// Job list loading and the swipeable browse deck.

pub mod deck;
pub mod handlers;
pub mod store;
