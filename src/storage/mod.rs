//! In-memory containers
//!
//! This module holds the ordered list that keeps pending transactions sorted
//! by fee and the priority queue the chain builder drains.

pub mod ordered_list;
pub mod priority_queue;

pub use ordered_list::{OrderedList, PriorityKey};
pub use priority_queue::PriorityQueue;
