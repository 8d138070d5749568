/*! Integration tests for Mathforge.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - collection: Count synchronization through documents
 * - defaults: Default tables, custom entries and fail-fast construction
 * - modes: Mode inheritance, seeding and mode switches
 * - containers: Per-kind invariants (locked rules, term ids, expression arity)
 * - document: Update propagation and error reporting
 * - input: Completing partial JSON from defaults
 * - render: Pre-order traversal and control state
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("mathforge=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod collection;
mod defaults;
mod document;
mod helpers;
mod input;
mod modes;
