//! Installs the global subscriber, so this file holds a single test.

use runtime::{init_logging_from_config, LoggingConfig};
use tempfile::tempdir;
use tracing::subscriber::{set_global_default, NoSubscriber};

#[test]
fn empty_config_installs_plain_subscriber() {
    let home = tempdir().unwrap();

    init_logging_from_config(&LoggingConfig::new(), home.path());
    tracing::info!("plain fmt output");

    // The global slot is already taken.
    assert!(set_global_default(NoSubscriber::default()).is_err());
    // Nothing is written under the base dir without a configured file.
    assert_eq!(std::fs::read_dir(home.path()).unwrap().count(), 0);
}
