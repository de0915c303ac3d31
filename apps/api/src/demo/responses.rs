//! Canned answers for the advisor and support demos.

/// Which scripted assistant is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assistant {
    Advisor,
    Support,
}

const ADVISOR_ANSWERS: &[(&str, &str)] = &[
    (
        "How should I start investing with $10,000?",
        "Recommended Investment Strategy for $10,000:\n\
         1. Emergency Fund First: Ensure you have 3-6 months of expenses saved\n\
         2. Diversified Portfolio: 70% stocks (mix of index funds), 30% bonds\n\
         3. Low-Cost Index Funds: Consider VTSAX or similar broad market funds\n\
         4. Dollar-Cost Averaging: Invest gradually over 6-12 months\n\
         5. Tax-Advantaged Accounts: Prioritize IRA/401k contributions\n\
         Risk Level: Moderate | Time Horizon: 5+ years recommended",
    ),
    (
        "What are the best retirement planning options for someone in their 30s?",
        "Retirement Planning Strategy for 30s:\n\
         1. 401(k) Maximization: Contribute at least to employer match\n\
         2. Roth IRA: $6,500 annual limit, tax-free growth\n\
         3. Target Date Funds: Automatic rebalancing for your retirement year\n\
         4. Aggressive Allocation: 80-90% stocks given long time horizon\n\
         5. HSA Triple Advantage: If available, max out Health Savings Account\n\
         Goal: Save 15-20% of income | Current advantage: 35+ years to grow",
    ),
    (
        "How can I reduce my financial risk in this market?",
        "Risk Reduction Strategies:\n\
         1. Portfolio Diversification: Spread across asset classes and geographies\n\
         2. Emergency Fund: 6-12 months expenses in high-yield savings\n\
         3. Dollar-Cost Averaging: Regular investments reduce timing risk\n\
         4. Quality Bonds: Government and high-grade corporate bonds\n\
         5. Rebalancing: Quarterly portfolio rebalancing maintains target allocation\n\
         Current market volatility requires defensive positioning",
    ),
    (
        "What should I know about cryptocurrency investments?",
        "Cryptocurrency Investment Guide:\n\
         1. High Risk Asset: Only invest what you can afford to lose\n\
         2. Portfolio Allocation: Maximum 5-10% of total investment portfolio\n\
         3. Major Cryptocurrencies: Focus on Bitcoin and Ethereum for stability\n\
         4. Security Measures: Use hardware wallets, enable 2FA\n\
         5. Tax Implications: Crypto transactions are taxable events\n\
         Regulatory uncertainty and extreme volatility require caution",
    ),
];

const SUPPORT_ANSWERS: &[(&str, &str)] = &[
    (
        "How do I reset my account password?",
        "1. Go to the login page and click \"Forgot Password\"\n\
         2. Enter your registered email address\n\
         3. Check your email for a reset link (may take 5-10 minutes)\n\
         4. Click the link and create a new secure password\n\
         5. Use the new password to log in",
    ),
    (
        "I need help understanding my investment portfolio performance.",
        "Our system provides comprehensive portfolio insights:\n\
         - Real-time portfolio value and daily changes\n\
         - Asset allocation breakdown with visual charts\n\
         - Performance comparison to market benchmarks\n\
         - Risk analysis and diversification metrics\n\
         - Tax-loss harvesting opportunities",
    ),
    (
        "What are your fees and pricing structure?",
        "- Portfolio Management: 0.75% annually\n\
         - Financial Planning: $199 one-time setup\n\
         - Investment Trades: $0 commission\n\
         - Account Maintenance: No monthly fees\n\
         - Premium AI Advisory: $29/month",
    ),
    (
        "How do I contact a human advisor?",
        "- Phone Support: 1-800-FINANCE (24/7)\n\
         - Video Consultation: Schedule through your dashboard\n\
         - In-Person Meeting: Available in major cities\n\
         - Priority Email: advisor@financialservices.com\n\
         - Live Chat: Available during business hours",
    ),
];

impl Assistant {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Assistant::Advisor => ADVISOR_ANSWERS,
            Assistant::Support => SUPPORT_ANSWERS,
        }
    }

    /// The suggested questions shown as buttons on the demo page.
    pub fn suggested_questions(self) -> Vec<&'static str> {
        self.table().iter().map(|(q, _)| *q).collect()
    }

    /// Scripted answer for a known question, or a generic reply echoing it.
    pub fn answer(self, question: &str) -> String {
        let question = question.trim();
        if let Some((_, answer)) = self.table().iter().find(|(q, _)| *q == question) {
            return answer.to_string();
        }
        match self {
            Assistant::Advisor => format!(
                "AI Analysis of Your Question:\n\
                 Thank you for your question: \"{question}\"\n\
                 Our AI financial advisor would analyze this question considering:\n\
                 - Your current financial situation and goals\n\
                 - Market conditions and economic factors\n\
                 - Risk tolerance and investment timeline\n\
                 - Regulatory and tax implications"
            ),
            Assistant::Support => format!(
                "Issue: \"{question}\"\n\
                 Our AI support system would:\n\
                 - Analyze your issue using natural language processing\n\
                 - Search our knowledge base for relevant solutions\n\
                 - Provide step-by-step resolution guidance\n\
                 - Escalate to human agents if needed\n\
                 - Create a ticket for tracking and follow-up"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_advisor_question() {
        let answer = Assistant::Advisor.answer("How should I start investing with $10,000?");
        assert!(answer.starts_with("Recommended Investment Strategy"));
    }

    #[test]
    fn test_known_question_ignores_surrounding_whitespace() {
        let answer = Assistant::Support.answer("  How do I contact a human advisor?\n");
        assert!(answer.contains("1-800-FINANCE"));
    }

    #[test]
    fn test_unknown_question_echoes() {
        let answer = Assistant::Advisor.answer("Should I buy a boat?");
        assert!(answer.contains("\"Should I buy a boat?\""));
        let answer = Assistant::Support.answer("My card is locked");
        assert!(answer.starts_with("Issue: \"My card is locked\""));
    }

    #[test]
    fn test_tables_do_not_overlap() {
        let advisor = Assistant::Advisor.suggested_questions();
        let support = Assistant::Support.suggested_questions();
        assert_eq!(advisor.len(), 4);
        assert_eq!(support.len(), 4);
        assert!(advisor.iter().all(|q| !support.contains(q)));
    }
}
