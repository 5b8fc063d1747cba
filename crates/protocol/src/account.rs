//! Account-level reference data shown in the settings modal.
//!
//! Team members, roles, the subscription plan, and which couriers,
//! integrations, and payment gateways are switched on.

use serde::Serialize;

/// A member of the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    /// Invitation sent but not accepted yet.
    pub invited: bool,
}

/// A named service that can be switched on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub name: &'static str,
    pub enabled: bool,
}

/// A metered plan limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage {
    pub label: &'static str,
    pub used: u32,
    /// `None` means unlimited.
    pub limit: Option<u32>,
}

impl Usage {
    /// Percentage of the limit used, rounded down. Unlimited usage is 0%.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::account::Usage;
    ///
    /// let users = Usage { label: "Users", used: 8, limit: Some(10) };
    /// assert_eq!(users.percent(), 80);
    /// ```
    #[must_use]
    pub fn percent(&self) -> u16 {
        match self.limit {
            Some(limit) if limit > 0 => {
                u16::try_from((u64::from(self.used) * 100 / u64::from(limit)).min(100))
                    .unwrap_or(100)
            }
            _ => 0,
        }
    }
}

/// The current subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub billing: &'static str,
    pub next_billing_date: &'static str,
    pub usage: Vec<Usage>,
}

/// Everything listed in the non-business settings sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSettings {
    pub plan: Plan,
    pub team: Vec<TeamMember>,
    pub roles: Vec<&'static str>,
    pub couriers: Vec<Toggle>,
    pub integrations: Vec<Toggle>,
    pub payment_gateways: Vec<Toggle>,
}

fn toggles(items: &[(&'static str, bool)]) -> Vec<Toggle> {
    items
        .iter()
        .map(|&(name, enabled)| Toggle { name, enabled })
        .collect()
}

impl AccountSettings {
    /// Number of enabled couriers.
    #[must_use]
    pub fn active_couriers(&self) -> usize {
        self.couriers.iter().filter(|c| c.enabled).count()
    }

    /// The account data shipped with the application.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            plan: Plan {
                name: "Professional Plan",
                price: "$49",
                billing: "Monthly billing",
                next_billing_date: "February 15, 2026",
                usage: vec![
                    Usage {
                        label: "Orders",
                        used: 2_847,
                        limit: Some(5_000),
                    },
                    Usage {
                        label: "Products",
                        used: 1_234,
                        limit: Some(2_000),
                    },
                    Usage {
                        label: "Users",
                        used: 8,
                        limit: Some(10),
                    },
                    Usage {
                        label: "Inventory",
                        used: 0,
                        limit: None,
                    },
                ],
            },
            team: vec![
                TeamMember {
                    name: "Ahmed Rahman",
                    email: "ahmed@acmecorp.com",
                    role: "Admin",
                    invited: false,
                },
                TeamMember {
                    name: "Fatima Khan",
                    email: "fatima@acmecorp.com",
                    role: "Manager",
                    invited: false,
                },
                TeamMember {
                    name: "Karim Hassan",
                    email: "karim@acmecorp.com",
                    role: "Sales",
                    invited: false,
                },
                TeamMember {
                    name: "Nusrat Jahan",
                    email: "nusrat@acmecorp.com",
                    role: "Accounts",
                    invited: true,
                },
            ],
            roles: vec!["Admin", "Manager", "Sales", "Accounts", "Warehouse"],
            couriers: toggles(&[
                ("Pathao", true),
                ("Steadfast", true),
                ("RedX", false),
                ("Paperfly", false),
                ("Local Courier", true),
            ]),
            integrations: toggles(&[
                ("WooCommerce", true),
                ("Facebook Orders", false),
                ("WhatsApp", true),
                ("SMS Gateway", true),
            ]),
            payment_gateways: toggles(&[
                ("bKash", true),
                ("Nagad", false),
                ("Card Payment", false),
                ("Binance Pay", false),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_percentages() {
        let plan = AccountSettings::sample().plan;
        let percents: Vec<_> = plan.usage.iter().map(Usage::percent).collect();
        assert_eq!(percents, [56, 61, 80, 0]);
    }

    #[test]
    fn three_couriers_are_active() {
        assert_eq!(AccountSettings::sample().active_couriers(), 3);
    }
}
