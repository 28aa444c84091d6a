#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::highscores::{FileStore, HighScores, KeyValueStore, MAX_SCORES, MemoryStore, ScoreEntry};
    use tempfile::tempdir;

    fn entry(score: u32, timestamp: u64) -> ScoreEntry {
        ScoreEntry {
            score,
            level: score / 1000 + 1,
            timestamp,
        }
    }

    fn table_with(scores: &[u32]) -> HighScores<MemoryStore> {
        let mut table = HighScores::new(MemoryStore::new());
        for (i, &score) in scores.iter().enumerate() {
            table.add_entry(entry(score, i as u64)).expect("memory store never fails");
        }
        table
    }

    #[test]
    fn test_empty_table() {
        let table = HighScores::new(MemoryStore::new());
        assert!(table.entries().is_empty());
        assert!(table.is_high_score(0));
        assert_eq!(table.rank(0), 1);
    }

    #[test]
    fn test_entries_sorted_best_first() {
        let table = table_with(&[300, 1200, 50, 800]);
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![1200, 800, 300, 50]);
    }

    #[test]
    fn test_table_keeps_top_ten() {
        let scores: Vec<u32> = (1..=12).map(|n| n * 100).collect();
        let table = table_with(&scores);

        let entries = table.entries();
        assert_eq!(entries.len(), MAX_SCORES);
        assert_eq!(entries.first().map(|e| e.score), Some(1200));
        assert_eq!(entries.last().map(|e| e.score), Some(300));
    }

    #[test]
    fn test_is_high_score() {
        let scores: Vec<u32> = (1..=10).map(|n| n * 100).collect();
        let table = table_with(&scores);

        assert!(!table.is_high_score(50));
        // Tying the lowest entry is not enough on a full table
        assert!(!table.is_high_score(100));
        assert!(table.is_high_score(101));

        let partial = table_with(&[500]);
        assert!(partial.is_high_score(1));
    }

    #[test]
    fn test_rank() {
        let table = table_with(&[1000, 500, 200]);
        assert_eq!(table.rank(2000), 1);
        assert_eq!(table.rank(1000), 2);
        assert_eq!(table.rank(600), 2);
        assert_eq!(table.rank(500), 3);
        assert_eq!(table.rank(10), 4);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut table = HighScores::new(MemoryStore::new());
        table.add_entry(entry(500, 1)).expect("memory store never fails");
        table.add_entry(entry(500, 2)).expect("memory store never fails");
        table.add_entry(entry(900, 3)).expect("memory store never fails");

        let timestamps: Vec<u64> = table.entries().iter().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![3, 1, 2]);
    }

    #[test]
    fn test_encoded_format() {
        let table = table_with(&[700, 300]);
        let raw = table.store().get("high_scores").expect("scores were saved");
        assert_eq!(raw, "700,1,0;300,1,1");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let mut store = MemoryStore::new();
        store
            .put("high_scores", "500,2,1;garbage;1,2;300,1,2;4,5,6,7".to_owned())
            .expect("memory store never fails");
        let table = HighScores::new(store);

        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 300]);
    }

    #[test]
    fn test_add_score_stamps_time() {
        let mut table = HighScores::new(MemoryStore::new());
        table.add_score(4200, 5).expect("memory store never fails");

        let entries = table.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, 4200);
        assert_eq!(entries[0].level, 5);
        assert!(entries[0].timestamp > 0);
    }

    #[test]
    fn test_file_store_persists() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("scores").join("high_scores.toml");

        {
            let store = FileStore::open(&path).expect("Failed to open store");
            assert!(!path.exists(), "Opening alone should not create the file");
            let mut table = HighScores::new(store);
            table.add_entry(entry(900, 10)).expect("Failed to save score");
            table.add_entry(entry(1500, 11)).expect("Failed to save score");
        }
        assert!(path.exists());

        let reopened = HighScores::new(FileStore::open(&path).expect("Failed to reopen store"));
        assert_eq!(reopened.store().path(), path.as_path());
        assert_eq!(reopened.entries(), vec![entry(1500, 11), entry(900, 10)]);
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("high_scores.toml");
        std::fs::write(&path, "not = [valid").expect("Failed to write file");

        assert!(FileStore::open(&path).is_err());
    }
}
