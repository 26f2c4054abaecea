use super::event::Event;
use derby_core::Millis;

/// The immutable replay log of one race.
///
/// Offsets are non-decreasing, and a completed timeline ends with exactly
/// one [`Event::Finish`]. Presentation layers replay it against a published
/// start instant: everything in [`Timeline::until`] of the elapsed time has
/// already happened.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Timeline(Vec<Event>);

impl Timeline {
    pub(crate) fn push(&mut self, event: Event) {
        debug_assert!(self.0.last().map_or(true, |last| last.at() <= event.at()));
        self.0.push(event);
    }
    pub fn events(&self) -> &[Event] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Offset of the final event.
    pub fn duration(&self) -> Millis {
        self.0.last().map(Event::at).unwrap_or_default()
    }
    /// Events due at or before `elapsed` milliseconds into the race.
    pub fn until(&self, elapsed: Millis) -> &[Event] {
        &self.0[..self.0.partition_point(|e| e.at() <= elapsed)]
    }
    /// The closing event, once the race is complete.
    pub fn finish(&self) -> Option<&Event> {
        self.0.last().filter(|e| e.is_finish())
    }
}

impl From<Timeline> for Vec<Event> {
    fn from(timeline: Timeline) -> Self {
        timeline.0
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
