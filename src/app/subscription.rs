// SPDX-License-Identifier: MPL-2.0
//! Routing of native window events to the uploader.

use super::Message;
use crate::ui::uploader;
use iced::{event, window, Subscription};

/// Forwards file hover, drop and leave events of the window to the uploader.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| route_window_event(event))
}

fn route_window_event(event: event::Event) -> Option<Message> {
    let event::Event::Window(window_event) = event else {
        return None;
    };

    let message = match window_event {
        window::Event::FileHovered(_) => uploader::Message::FileHovered,
        window::Event::FilesHoveredLeft => uploader::Message::FilesHoveredLeft,
        window::Event::FileDropped(path) => uploader::Message::FileDropped(path),
        _ => return None,
    };
    Some(Message::Uploader(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_drop_is_routed_to_uploader() {
        let path = PathBuf::from("/tmp/cat.png");
        let routed = route_window_event(event::Event::Window(window::Event::FileDropped(
            path.clone(),
        )));
        match routed {
            Some(Message::Uploader(uploader::Message::FileDropped(p))) => assert_eq!(p, path),
            other => panic!("unexpected routing: {other:?}"),
        }
    }

    #[test]
    fn hover_and_leave_are_routed() {
        assert!(matches!(
            route_window_event(event::Event::Window(window::Event::FileHovered(
                PathBuf::from("/tmp/a.png")
            ))),
            Some(Message::Uploader(uploader::Message::FileHovered))
        ));
        assert!(matches!(
            route_window_event(event::Event::Window(window::Event::FilesHoveredLeft)),
            Some(Message::Uploader(uploader::Message::FilesHoveredLeft))
        ));
    }

    #[test]
    fn other_window_events_are_ignored() {
        assert!(route_window_event(event::Event::Window(window::Event::Focused)).is_none());
    }
}
