//! Rule-based auto-responder for the website chat widget.
//!
//! Replies are canned strings selected by keyword category. Rules are checked
//! top to bottom and the first match wins, so pricing questions beat demo
//! questions even when a message mentions both.

pub const PRICING_REPLY: &str = "Our pricing depends on the solutions and scale you need. Please share your \
                                 email address and our team will prepare a tailored quote for you.";

pub const DEMO_REPLY: &str = "We offer personalized demos of our solutions. Please provide your email address \
                              and our team will reach out to schedule one that fits your requirements.";

pub const SUPPORT_REPLY: &str = "You can reach our support team at info@atlastechnosoft.com or through the \
                                 contact form on this page. We typically respond within one business day.";

pub const SAP_REPLY: &str = "Atlas Technosoft is an SAP Business One partner. We implement and support SAP \
                             Business One and related ERP solutions for businesses of all sizes. Would you \
                             like more details about a specific product?";

pub const AUTOMATION_REPLY: &str = "We build automation solutions including RPA bots and AI-powered workflows \
                                    that integrate with your existing systems. Tell us a bit about your \
                                    process and we can suggest the right approach.";

pub const GENERIC_REPLY: &str = "Thanks for reaching out! Please share a few details about what you are \
                                 looking for, or leave your email address and our team will get back to you \
                                 shortly.";

const RULES: &[(&[&str], &str)] = &[
    (&["price", "cost", "pricing"], PRICING_REPLY),
    (&["demo", "trial", "try"], DEMO_REPLY),
    (&["contact", "support", "help"], SUPPORT_REPLY),
    (&["sap", "business one", "erp"], SAP_REPLY),
    (&["automation", "ai", "rpa"], AUTOMATION_REPLY),
];

/// Picks the canned reply for a chat message.
#[must_use]
pub fn reply_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(GENERIC_REPLY, |(_, reply)| *reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_outranks_demo() {
        assert_eq!(reply_for("What is the pricing for a demo?"), PRICING_REPLY);
    }

    #[test]
    fn test_each_category_matches() {
        assert_eq!(reply_for("how much does it cost"), PRICING_REPLY);
        assert_eq!(reply_for("can I get a trial"), DEMO_REPLY);
        assert_eq!(reply_for("I need support with my account"), SUPPORT_REPLY);
        assert_eq!(reply_for("do you implement business one"), SAP_REPLY);
        assert_eq!(reply_for("looking for an rpa solution"), AUTOMATION_REPLY);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(reply_for("TELL ME ABOUT YOUR ERP OFFERING"), SAP_REPLY);
    }

    #[test]
    fn test_unmatched_message_gets_generic_reply() {
        assert_eq!(reply_for("hello there"), GENERIC_REPLY);
    }
}
