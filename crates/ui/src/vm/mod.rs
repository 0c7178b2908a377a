mod topic_vm;

pub use topic_vm::{TopicCardVm, map_topic_cards};
