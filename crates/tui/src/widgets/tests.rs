//! Snapshot tests for widget rendering.
//!
//! These tests use insta to capture and verify the visual output of widgets.

use nexus_protocol::{Catalog, Route};

use super::{render_header, render_placeholder, render_sidebar, render_tasks_page};
use crate::test_utils::{render_to_string, sample_state};

#[test]
fn snapshot_header() {
    let content = render_to_string(40, 3, |area, buf| {
        render_header("Nexus Store", Route::Orders, area, buf);
    });
    insta::assert_snapshot!(content, @r"
    ╭──────────────────────────────────────╮
    │Nexus Store - Orders  Press ? for help│
    ╰──────────────────────────────────────╯
    ");
}

#[test]
fn snapshot_sidebar_marks_active_route() {
    let content = render_to_string(20, 12, |area, buf| {
        render_sidebar(Route::Orders.path(), None, area, buf);
    });
    insta::assert_snapshot!(content, @r"
    ╭ Nexus ERP ───────╮
    │ 1 Dashboard      │
    │▌2 Orders         │
    │ 3 Tasks          │
    │ 4 Automation     │
    │ 5 Inventory      │
    │ 6 Customers      │
    │ 7 Suppliers      │
    │ 8 Finance        │
    │ 9 Marketplace    │
    │ 0 Reports        │
    ╰──────────────────╯
    ");
}

#[test]
fn every_unimplemented_route_has_a_placeholder() {
    for route in nexus_protocol::NAV_ITEMS
        .into_iter()
        .filter(|r| !r.is_implemented())
    {
        let content = render_to_string(60, 10, |area, buf| render_placeholder(route, area, buf));
        assert!(
            content.contains(&format!("{} is coming soon", route.label())),
            "missing notice for {route}"
        );
    }
}

#[test]
fn tiny_areas_do_not_panic() {
    let state = sample_state(Route::Tasks);
    let catalog = Catalog::sample();
    for (w, h) in [(1, 1), (5, 3), (12, 6)] {
        render_to_string(w, h, |area, buf| {
            render_tasks_page(&state, area, buf);
            render_sidebar("/", Some(0), area, buf);
            super::render_orders_page(
                &catalog.orders,
                &[],
                &crate::orders_state::OrdersState::new(10),
                area,
                buf,
            );
            super::render_customers_page(
                &catalog.customers,
                &crate::customers_state::CustomersState::default(),
                area,
                buf,
            );
        });
    }
}
