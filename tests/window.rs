#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use standup::libs::input::Producer;
    use standup::libs::window::{RecentWindows, WindowMonitor, MAX_WINDOW_TITLES};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_push_puts_newest_title_first() {
        let mut windows = RecentWindows::new();
        windows.push("Editor");
        windows.push("Browser");
        windows.push("Terminal");

        assert_eq!(windows.titles(), vec!["Terminal", "Browser", "Editor"]);
    }

    #[test]
    fn test_push_same_title_twice_is_a_no_op() {
        let mut windows = RecentWindows::new();
        windows.push("Editor");
        windows.push("Editor");

        assert_eq!(windows.titles(), vec!["Editor"]);
    }

    #[test]
    fn test_push_moves_known_title_to_front_without_duplicate() {
        let mut windows = RecentWindows::new();
        for title in ["A", "B", "C"] {
            windows.push(title);
        }
        windows.push("A");

        assert_eq!(windows.titles(), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_push_keeps_only_most_recent_titles() {
        let mut windows = RecentWindows::new();
        for title in ["1", "2", "3", "4", "5", "6", "7"] {
            windows.push(title);
        }

        assert_eq!(windows.titles().len(), MAX_WINDOW_TITLES);
        assert_eq!(windows.titles(), vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_slots_pad_with_empty_titles() {
        let mut windows = RecentWindows::new();
        windows.push("Editor");
        windows.push("Browser");

        let slots = windows.slots();
        assert_eq!(slots[0], "Browser");
        assert_eq!(slots[1], "Editor");
        assert!(slots[2..].iter().all(String::is_empty));
    }

    #[test]
    fn test_monitor_polls_on_start_and_stops() {
        let windows = Arc::new(Mutex::new(RecentWindows::new()));
        let monitor =
            WindowMonitor::spawn_with(windows.clone(), Duration::from_secs(3600), || "Editor".to_string()).unwrap();

        Box::new(monitor).stop();

        assert_eq!(windows.lock().titles(), vec!["Editor"]);
    }
}
