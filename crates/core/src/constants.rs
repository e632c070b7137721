//! Question identifiers shared by the catalog and the scoring engine.

/// Free-text identity question; never scored
pub const NAME: &str = "name";

// Behavioral
pub const SPENDING_DISCIPLINE: &str = "spending_discipline";
pub const CURRENT_SAVINGS: &str = "current_savings";
pub const PANIC_REACTION: &str = "panic_reaction";
pub const LONG_TERM_PATIENCE: &str = "long_term_patience";
pub const FINANCIAL_KNOWLEDGE: &str = "financial_knowledge";
pub const PEER_INFLUENCE: &str = "peer_influence";

// Background
pub const EDUCATION: &str = "education";
pub const FAMILY_BACKGROUND: &str = "family_background";
pub const YEARS_WORKING: &str = "years_working";
pub const AGE: &str = "age";

// Financial health
pub const DEBT_STATUS: &str = "debt_status";
pub const EMERGENCY_FUND: &str = "emergency_fund";

// Profile and projection inputs
pub const RISK_TOLERANCE: &str = "risk_tolerance";
pub const MARKET_EXPERIENCE: &str = "market_experience";
pub const FINANCIAL_GOALS: &str = "financial_goals";
pub const INITIAL_INVESTMENT: &str = "initial_investment";
pub const MONTHLY_CONTRIBUTION: &str = "monthly_contribution";
pub const TIME_HORIZON: &str = "time_horizon";

/// Prefix of generated quiz session identifiers
pub const SESSION_ID_PREFIX: &str = "session_";
