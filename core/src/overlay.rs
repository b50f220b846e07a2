use crate::media::MediaRef;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open(MediaRef),
}

impl Default for OverlayState {
    fn default() -> Self {
        OverlayState::Closed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Escape,
    Backdrop,
    Api,
    Teardown,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Button => "button",
            CloseReason::Escape => "escape",
            CloseReason::Backdrop => "backdrop",
            CloseReason::Api => "api",
            CloseReason::Teardown => "teardown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    Open(MediaRef),
    Close(CloseReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Replaced,
    Closed,
    Unchanged,
}

impl Transition {
    /// Whether the DOM projection has to be rebuilt.
    pub fn needs_render(self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn media(&self) -> Option<&MediaRef> {
        match self {
            OverlayState::Open(media) => Some(media),
            OverlayState::Closed => None,
        }
    }

    /// Reopening always counts as a replacement, even for the same media, so
    /// a video restarts from the beginning.
    pub fn apply(&mut self, action: OverlayAction) -> Transition {
        match action {
            OverlayAction::Open(media) => {
                let was_open = self.is_open();
                *self = OverlayState::Open(media);
                if was_open {
                    Transition::Replaced
                } else {
                    Transition::Opened
                }
            }
            OverlayAction::Close(_) => {
                if self.is_open() {
                    *self = OverlayState::Closed;
                    Transition::Closed
                } else {
                    Transition::Unchanged
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
        assert_eq!(OverlayState::default().media(), None);
    }

    #[test]
    fn close_on_closed_is_a_no_op() {
        let mut state = OverlayState::Closed;
        let transition = state.apply(OverlayAction::Close(CloseReason::Escape));
        assert_eq!(transition, Transition::Unchanged);
        assert!(!transition.needs_render());
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn open_then_reopen_replaces() {
        let mut state = OverlayState::Closed;
        assert_eq!(
            state.apply(OverlayAction::Open(MediaRef::image("/a.png"))),
            Transition::Opened
        );
        assert_eq!(
            state.apply(OverlayAction::Open(MediaRef::video("/b.mp4"))),
            Transition::Replaced
        );
        assert_eq!(state.media(), Some(&MediaRef::video("/b.mp4")));
    }
}
