//! Statistics command

use crate::output::print_statistics;
use crate::persistence::{Persistence, Store};

/// Print the saved statistics, zeroed if none are stored
pub fn run_stats<S: Store>(persistence: &Persistence<S>) {
    print_statistics(&persistence.load_statistics());
}
