use serde::Serialize;

use crate::navigation::Page;

use super::{ACTIVE_USERS, TOTAL_DOCUMENTS};

const TOTAL_SEARCHES: u32 = 26_600;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCard {
    pub title: &'static str,
    pub description: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUpdate {
    pub title: &'static str,
    /// Relative age as shown, e.g. "2 hours ago".
    pub posted: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub quick_cards: Vec<QuickCard>,
    pub recent_updates: Vec<RecentUpdate>,
}

pub fn dashboard() -> DashboardData {
    let card = |title, description, count| QuickCard {
        title,
        description,
        count,
    };
    let update = |title, posted, kind| RecentUpdate { title, posted, kind };

    DashboardData {
        quick_cards: vec![
            card("Policies", "Government policies and regulations", 435),
            card("Schemes", "Educational schemes and programs", 280),
            card("Reports", "Detailed reports and analytics", 150),
            card("Regulations", "Latest updates and notifications", 220),
        ],
        recent_updates: vec![
            update(
                "New scholarship schemes announced for SC/ST students",
                "2 hours ago",
                "Scheme",
            ),
            update(
                "National Education Policy 2020 - Implementation Guidelines",
                "5 hours ago",
                "Policy",
            ),
            update(
                "PM USHA (Unnat Bharat Abhiyan) scheme for Higher Education",
                "1 day ago",
                "Scheme",
            ),
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Month-over-month change, e.g. "+12%".
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsagePoint {
    pub month: &'static str,
    pub documents: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub searches: u32,
    pub users: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentShare {
    pub name: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyViews {
    pub name: &'static str,
    pub views: u32,
    /// Share of the most viewed policy, 0..=100, for the bar widths.
    pub relative_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub stats: Vec<StatCard>,
    pub document_usage: Vec<UsagePoint>,
    pub search_trends: Vec<TrendPoint>,
    pub departments: Vec<DepartmentShare>,
    pub top_policies: Vec<PolicyViews>,
}

pub fn analytics() -> AnalyticsData {
    let search_trends: Vec<TrendPoint> = [
        ("Jan", 3200, 2100),
        ("Feb", 3800, 2400),
        ("Mar", 4200, 2800),
        ("Apr", 5200, 3400),
        ("May", 5800, 3900),
    ]
    .into_iter()
    .map(|(month, searches, users)| TrendPoint {
        month,
        searches,
        users,
    })
    .collect();

    AnalyticsData {
        stats: vec![
            stat("Total Documents", thousands(TOTAL_DOCUMENTS), "+12%"),
            stat("Total Searches", thousands(TOTAL_SEARCHES), "+18%"),
            stat("Active Users", thousands(ACTIVE_USERS), "+8%"),
            stat("Success Rate", "94.2%".to_string(), "+2.1%"),
        ],
        document_usage: [
            ("Jan", 4500),
            ("Feb", 3200),
            ("Mar", 2800),
            ("Apr", 1800),
            ("May", 1600),
        ]
        .into_iter()
        .map(|(month, documents)| UsagePoint { month, documents })
        .collect(),
        search_trends,
        departments: [
            ("Higher Education", 35),
            ("School Education", 28),
            ("Vocational Training", 20),
            ("Research & Innovation", 17),
        ]
        .into_iter()
        .map(|(name, percent)| DepartmentShare { name, percent })
        .collect(),
        top_policies: top_policies(&[
            ("NEP 2020", 15420),
            ("PM USHA Scheme", 12350),
            ("UGC Guidelines 2023", 9870),
            ("Samagra Shiksha", 8640),
            ("SWAYAM Platform", 7230),
        ]),
    }
}

fn stat(title: &'static str, value: String, change: &'static str) -> StatCard {
    StatCard {
        title,
        value,
        change,
    }
}

fn top_policies(entries: &[(&'static str, u32)]) -> Vec<PolicyViews> {
    let max = entries.iter().map(|(_, views)| *views).max().unwrap_or(0).max(1);
    entries
        .iter()
        .map(|&(name, views)| PolicyViews {
            name,
            views,
            relative_percent: (u64::from(views) * 100 / u64::from(max)) as u8,
        })
        .collect()
}

/// 26600 -> "26,600".
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub page: Page,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub online: bool,
    pub documents: u32,
    pub active_users: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarData {
    pub items: Vec<MenuItem>,
    pub status: SystemStatus,
}

pub fn sidebar() -> SidebarData {
    let items = Page::ALL
        .into_iter()
        .map(|page| MenuItem {
            page,
            label: menu_label(page),
        })
        .collect();

    SidebarData {
        items,
        status: SystemStatus {
            online: true,
            documents: TOTAL_DOCUMENTS,
            active_users: ACTIVE_USERS,
        },
    }
}

fn menu_label(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "Dashboard",
        Page::Results => "Search Results",
        Page::Document => "Document Viewer",
        Page::Analytics => "Analytics",
        Page::Support => "Support",
        Page::About => "About",
    }
}
