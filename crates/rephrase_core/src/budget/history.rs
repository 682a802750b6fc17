//! Trailing-history selection under a token ceiling.

use crate::message::Message;

use super::counter::TokenCounter;

/// Select the longest suffix of `messages` whose cumulative token count
/// stays within `budget`.
///
/// Walks from the newest message backward, accumulating per-message token
/// counts, and stops before the first message that would push the total over
/// `budget`. The returned slice preserves chronological order. If even the
/// newest message is over budget the result is empty; message text is never
/// truncated.
pub fn select_history<'a>(
    messages: &'a [Message],
    budget: u32,
    counter: &dyn TokenCounter,
) -> &'a [Message] {
    let mut used = 0u32;
    let mut start = messages.len();
    for (index, message) in messages.iter().enumerate().rev() {
        let tokens = counter.count_message(message);
        match used.checked_add(tokens) {
            Some(total) if total <= budget => {
                used = total;
                start = index;
            }
            _ => break,
        }
    }
    &messages[start..]
}
