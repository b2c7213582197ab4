//! Tests for column progress tracking across attempts

#[cfg(test)]
mod tests {
    use edgetile::io::progress::ProgressManager;

    // Tests a hidden manager still tracks resolved columns
    // Verified by skipping position updates on hidden bars
    #[test]
    fn test_hidden_manager_tracks_columns() {
        let mut pm = ProgressManager::hidden(5);
        assert_eq!(pm.attempt(), 0);

        pm.start_attempt(1, 42);
        pm.complete_column(0);
        pm.complete_column(1);

        assert_eq!(pm.position(), 2);
        assert_eq!(pm.attempt(), 1);
        pm.finish();
    }

    // Tests starting a new attempt resets the column count
    // Verified by carrying the position across attempts
    #[test]
    fn test_new_attempt_resets_position() {
        let mut pm = ProgressManager::hidden(4);

        pm.start_attempt(1, 10);
        pm.complete_column(2);
        assert_eq!(pm.position(), 3);

        pm.start_attempt(2, 11);
        assert_eq!(pm.position(), 0);
        assert_eq!(pm.attempt(), 2);
    }

    // Tests visible managers share the same bookkeeping
    // Verified by drawing without updating the position
    #[test]
    fn test_visible_manager_lifecycle() {
        let mut pm = ProgressManager::new(3);

        pm.start_attempt(1, 0);
        for column in 0..3 {
            pm.complete_column(column);
        }

        assert_eq!(pm.position(), 3);
        pm.finish();
    }
}
