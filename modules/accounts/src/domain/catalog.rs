//! Static locale reference data: supported countries, currencies, the
//! country→currency suggestion map, and the program-goal catalog.

use reset_program::contract::model::ResetGoal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalInfo {
    pub value: ResetGoal,
    pub label: &'static str,
    pub description: &'static str,
}

pub const COUNTRIES: [Country; 18] = [
    Country { code: "US", name: "United States" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "NG", name: "Nigeria" },
    Country { code: "GH", name: "Ghana" },
    Country { code: "KE", name: "Kenya" },
    Country { code: "ZA", name: "South Africa" },
    Country { code: "CA", name: "Canada" },
    Country { code: "AU", name: "Australia" },
    Country { code: "IN", name: "India" },
    Country { code: "BR", name: "Brazil" },
    Country { code: "MX", name: "Mexico" },
    Country { code: "SG", name: "Singapore" },
    Country { code: "AE", name: "United Arab Emirates" },
    Country { code: "ZW", name: "Zimbabwe" },
    Country { code: "UG", name: "Uganda" },
    Country { code: "TZ", name: "Tanzania" },
    Country { code: "RW", name: "Rwanda" },
    Country { code: "CM", name: "Cameroon" },
];

pub const CURRENCIES: [Currency; 15] = [
    Currency { code: "USD", name: "US Dollar" },
    Currency { code: "GBP", name: "British Pound" },
    Currency { code: "EUR", name: "Euro" },
    Currency { code: "NGN", name: "Nigerian Naira" },
    Currency { code: "GHS", name: "Ghanaian Cedi" },
    Currency { code: "KES", name: "Kenyan Shilling" },
    Currency { code: "ZAR", name: "South African Rand" },
    Currency { code: "CAD", name: "Canadian Dollar" },
    Currency { code: "AUD", name: "Australian Dollar" },
    Currency { code: "INR", name: "Indian Rupee" },
    Currency { code: "BRL", name: "Brazilian Real" },
    Currency { code: "MXN", name: "Mexican Peso" },
    Currency { code: "JPY", name: "Japanese Yen" },
    Currency { code: "SGD", name: "Singapore Dollar" },
    Currency { code: "AED", name: "UAE Dirham" },
];

/// Suggested currency per country, used by clients to prefill onboarding.
pub const COUNTRY_CURRENCIES: [(&str, &str); 20] = [
    ("US", "USD"), ("GB", "GBP"), ("EU", "EUR"), ("NG", "NGN"), ("GH", "GHS"),
    ("KE", "KES"), ("ZA", "ZAR"), ("CA", "CAD"), ("AU", "AUD"), ("IN", "INR"),
    ("BR", "BRL"), ("MX", "MXN"), ("JP", "JPY"), ("SG", "SGD"), ("AE", "AED"),
    ("ZW", "ZWL"), ("UG", "UGX"), ("TZ", "TZS"), ("RW", "RWF"), ("CM", "XAF"),
];

pub const RESET_GOALS: [GoalInfo; 4] = [
    GoalInfo {
        value: ResetGoal::BudgetDiscipline,
        label: "Budget Discipline",
        description: "Build consistent spending habits",
    },
    GoalInfo {
        value: ResetGoal::DebtReset,
        label: "Debt Reset",
        description: "Create a debt-free plan",
    },
    GoalInfo {
        value: ResetGoal::SavingsGrowth,
        label: "Savings Growth",
        description: "Grow your emergency fund & savings",
    },
    GoalInfo {
        value: ResetGoal::GivingConsistency,
        label: "Giving Consistency",
        description: "Establish faithful tithing habits",
    },
];

pub fn suggested_currency(country: &str) -> Option<&'static str> {
    COUNTRY_CURRENCIES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, cur)| *cur)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_currency_suggestions_resolve() {
        assert_eq!(suggested_currency("NG"), Some("NGN"));
        assert_eq!(suggested_currency("US"), Some("USD"));
        assert_eq!(suggested_currency("XX"), None);
    }

    #[test]
    fn goal_catalog_covers_every_goal() {
        assert_eq!(RESET_GOALS.len(), ResetGoal::ALL.len());
    }
}
