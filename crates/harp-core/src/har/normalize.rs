//! Decode-time normalization of the entry list.

use super::parse::HarEntry;

const WEBSOCKET_PREFIX: &str = "ws://";

/// Drops WebSocket handshakes; they cannot be replayed as plain HTTP requests.
///
/// Prefix match on `ws://`, case-sensitive. Returns how many entries were dropped.
pub fn drop_websocket_entries(entries: &mut Vec<HarEntry>) -> usize {
    let before = entries.len();
    entries.retain(|e| !e.request.url.starts_with(WEBSOCKET_PREFIX));
    before - entries.len()
}

/// Orders entries as they happened: ascending by the raw `startedDateTime` text.
///
/// This is a string comparison, not a date comparison; it relies on the capture
/// using one timestamp format throughout.
pub fn sort_by_start_time(entries: &mut [HarEntry]) {
    entries.sort_by(|a, b| a.started_date_time.cmp(&b.started_date_time));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(started: &str, url: &str) -> HarEntry {
        let mut e = HarEntry {
            started_date_time: started.to_string(),
            ..HarEntry::default()
        };
        e.request.url = url.to_string();
        e
    }

    #[test]
    fn drops_only_ws_prefix() {
        let mut entries = vec![
            entry("1", "ws://a.test/socket"),
            entry("2", "http://a.test/"),
            entry("3", "wss://a.test/socket"),
            entry("4", "WS://a.test/socket"),
            entry("5", "http://a.test/?ws://"),
        ];
        assert_eq!(drop_websocket_entries(&mut entries), 1);
        let urls: Vec<_> = entries.iter().map(|e| e.request.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://a.test/",
                "wss://a.test/socket",
                "WS://a.test/socket",
                "http://a.test/?ws://"
            ]
        );
    }

    #[test]
    fn drop_handles_empty_single_and_tail() {
        let mut empty: Vec<HarEntry> = Vec::new();
        assert_eq!(drop_websocket_entries(&mut empty), 0);

        let mut single = vec![entry("1", "ws://a.test/")];
        assert_eq!(drop_websocket_entries(&mut single), 1);
        assert!(single.is_empty());

        let mut tail = vec![entry("1", "http://a.test/"), entry("2", "ws://a.test/")];
        assert_eq!(drop_websocket_entries(&mut tail), 1);
        assert_eq!(tail.len(), 1);
    }

    #[test]
    fn drop_handles_consecutive_matches() {
        let mut entries = vec![
            entry("1", "ws://a.test/1"),
            entry("2", "ws://a.test/2"),
            entry("3", "http://a.test/"),
            entry("4", "ws://a.test/3"),
        ];
        assert_eq!(drop_websocket_entries(&mut entries), 3);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].request.url, "http://a.test/");
    }

    #[test]
    fn sort_is_lexicographic_on_raw_text() {
        let mut entries = vec![
            entry("2024-01-01T10:00:00.000Z", "c"),
            entry("2024-01-01T09:00:00.000Z", "a"),
            entry("2024-01-01T09:30:00.000Z", "b"),
        ];
        sort_by_start_time(&mut entries);
        let urls: Vec<_> = entries.iter().map(|e| e.request.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b", "c"]);

        // Not a date comparison: "9" sorts after "10" as text.
        let mut entries = vec![entry("9", "late"), entry("10", "early")];
        sort_by_start_time(&mut entries);
        assert_eq!(entries[0].request.url, "early");
    }
}
