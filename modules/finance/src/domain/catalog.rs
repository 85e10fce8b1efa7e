//! Default budget categories offered to new budgets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub const DEFAULT_CATEGORIES: [DefaultCategory; 10] = [
    DefaultCategory { name: "Housing / Rent", color: "#2F6B4F", icon: "home" },
    DefaultCategory { name: "Food & Groceries", color: "#B08D57", icon: "shopping-cart" },
    DefaultCategory { name: "Transport", color: "#6B7280", icon: "car" },
    DefaultCategory { name: "Utilities", color: "#1F2937", icon: "zap" },
    DefaultCategory { name: "Healthcare", color: "#B42318", icon: "heart" },
    DefaultCategory { name: "Education", color: "#4F6B2F", icon: "book" },
    DefaultCategory { name: "Entertainment", color: "#8D57B0", icon: "tv" },
    DefaultCategory { name: "Clothing", color: "#574BB0", icon: "shirt" },
    DefaultCategory { name: "Savings", color: "#2F6B4F", icon: "piggy-bank" },
    DefaultCategory { name: "Miscellaneous", color: "#9CA3AF", icon: "more-horizontal" },
];
