//! Dashboard figures.
//!
//! Headline KPIs, the monthly sales trend, and the revenue split by product
//! category. These are reporting snapshots, not derived from the catalog.

use serde::Serialize;

/// A headline number with a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

/// Month labels for [`DashboardData::monthly_sales`].
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A selectable option group on the dashboard filter card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub label: &'static str,
    pub options: &'static [&'static str],
}

/// A line of the recent orders card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentOrder {
    pub id: &'static str,
    pub customer: &'static str,
    pub product: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
    pub date: &'static str,
}

/// An entry of the team activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub user: &'static str,
    pub action: &'static str,
    pub target: &'static str,
    pub time: &'static str,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub kpis: Vec<Kpi>,
    /// Sales per month, January first, in thousands of dollars.
    pub monthly_sales: [u64; 12],
    /// Revenue share per category, in percent. Sums to 100.
    pub revenue_by_category: Vec<(&'static str, u64)>,
    pub filters: Vec<FilterOptions>,
    pub actions: [&'static str; 4],
    pub recent_orders: Vec<RecentOrder>,
    pub activity: Vec<FeedItem>,
}

impl DashboardData {
    /// Total of [`DashboardData::monthly_sales`], in thousands of dollars.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::DashboardData;
    ///
    /// assert_eq!(DashboardData::sample().yearly_sales(), 24_450);
    /// ```
    #[must_use]
    pub fn yearly_sales(&self) -> u64 {
        self.monthly_sales.iter().sum()
    }

    /// Month with the highest sales, as `(label, thousands)`.
    #[must_use]
    pub fn best_month(&self) -> Option<(&'static str, u64)> {
        MONTHS
            .iter()
            .copied()
            .zip(self.monthly_sales)
            .max_by_key(|(_, sales)| *sales)
    }

    /// The reporting snapshot shipped with the application.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            kpis: vec![
                Kpi {
                    label: "Total Revenue",
                    value: "$44.7M",
                    caption: "+12.5% YoY",
                },
                Kpi {
                    label: "Total Sales",
                    value: "$44.6M",
                    caption: "Current period",
                },
                Kpi {
                    label: "Customers",
                    value: "202.6K",
                    caption: "Active users",
                },
                Kpi {
                    label: "Units Sold",
                    value: "334.9K",
                    caption: "Total units",
                },
            ],
            monthly_sales: [
                1_500, 1_600, 1_850, 1_700, 2_100, 2_050, 1_950, 2_200, 2_350, 2_100, 2_450, 2_600,
            ],
            revenue_by_category: vec![
                ("Electronics", 35),
                ("Software", 25),
                ("Hardware", 20),
                ("Services", 12),
                ("Other", 8),
            ],
            filters: vec![
                FilterOptions {
                    label: "Category",
                    options: &["All Categories", "Electronics", "Software", "Services", "Hardware"],
                },
                FilterOptions {
                    label: "Region",
                    options: &[
                        "All Regions",
                        "North America",
                        "Europe",
                        "Asia Pacific",
                        "Latin America",
                    ],
                },
                FilterOptions {
                    label: "Time Period",
                    options: &[
                        "Last 7 days",
                        "Last 30 days",
                        "Last 90 days",
                        "Last 12 months",
                        "Year to date",
                    ],
                },
            ],
            actions: ["Export", "Share", "Email Report", "Schedule"],
            recent_orders: vec![
                RecentOrder {
                    id: "ORD-7892",
                    customer: "Acme Corporation",
                    product: "Enterprise License",
                    amount: "$12,400",
                    status: "Completed",
                    date: "Jan 28, 2026",
                },
                RecentOrder {
                    id: "ORD-7891",
                    customer: "TechStart Inc",
                    product: "Team Plan",
                    amount: "$4,200",
                    status: "Processing",
                    date: "Jan 28, 2026",
                },
                RecentOrder {
                    id: "ORD-7890",
                    customer: "Global Systems",
                    product: "Custom Integration",
                    amount: "$28,500",
                    status: "Completed",
                    date: "Jan 27, 2026",
                },
                RecentOrder {
                    id: "ORD-7889",
                    customer: "DataFlow Ltd",
                    product: "API Access",
                    amount: "$1,850",
                    status: "Pending",
                    date: "Jan 27, 2026",
                },
                RecentOrder {
                    id: "ORD-7888",
                    customer: "CloudNine Solutions",
                    product: "Enterprise License",
                    amount: "$15,200",
                    status: "Completed",
                    date: "Jan 26, 2026",
                },
            ],
            activity: vec![
                FeedItem {
                    user: "Sarah Chen",
                    action: "created a new order",
                    target: "ORD-7892",
                    time: "2 minutes ago",
                },
                FeedItem {
                    user: "Mike Johnson",
                    action: "updated inventory for",
                    target: "SKU-4521",
                    time: "15 minutes ago",
                },
                FeedItem {
                    user: "Emma Wilson",
                    action: "approved purchase order",
                    target: "PO-1284",
                    time: "1 hour ago",
                },
                FeedItem {
                    user: "Alex Rivera",
                    action: "shipped order",
                    target: "ORD-7890",
                    time: "2 hours ago",
                },
                FeedItem {
                    user: "David Park",
                    action: "added new customer",
                    target: "CloudNine Solutions",
                    time: "3 hours ago",
                },
            ],
        }
    }
}
