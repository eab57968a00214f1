//! Simulated back-office fixtures.

use boprobe_core::simulate::{BackOfficeFixture, SimulatedBackOffice, SimulatedGrid, demo_fixture};
use boprobe_core::types::SortDirection;

use super::config::{TEST_EMAIL, TEST_PASSWORD};

/// Demo catalog accepting only the test account.
#[allow(dead_code)]
pub async fn demo_backoffice() -> SimulatedBackOffice {
    SimulatedBackOffice::demo()
        .await
        .with_credentials(TEST_EMAIL, TEST_PASSWORD)
}

/// Demo catalog with a modified fixture.
#[allow(dead_code)]
pub async fn backoffice_with(edit: impl FnOnce(&mut BackOfficeFixture)) -> SimulatedBackOffice {
    let mut fixture = demo_fixture();
    edit(&mut fixture);
    SimulatedBackOffice::from_fixture(fixture)
        .await
        .with_credentials(TEST_EMAIL, TEST_PASSWORD)
}

/// Movements grid whose header clicks never reorder rows.
#[allow(dead_code)]
pub fn broken_movements() -> SimulatedGrid {
    SimulatedGrid::builder(["date_add", "product_id", "product_name", "reference", "quantity"])
        .numeric("product_id")
        .numeric("quantity")
        .default_sort("date_add", SortDirection::Desc)
        .broken_sort()
        .row(["2024-03-05 10:12:01", "6", "Mug The best is yet to come", "demo_6", "+12"])
        .row(["2024-03-04 16:40:22", "2", "Hummingbird printed sweater", "demo_2", "-3"])
        .row(["2024-03-04 09:05:13", "11", "Hummingbird cushion", "demo_11", "+25"])
        .build()
}

/// Demo stocks paired with [`broken_movements`].
#[allow(dead_code)]
pub async fn backoffice_with_broken_movements() -> SimulatedBackOffice {
    let stocks = SimulatedGrid::from_fixture(demo_fixture().stocks);
    SimulatedBackOffice::new(stocks, broken_movements())
        .await
        .with_credentials(TEST_EMAIL, TEST_PASSWORD)
}
