//! Built-in provider profiles.

use crate::records::RecordType;

use super::profile::{AdditionalRecord, MxTemplate, ProviderProfile};

fn selectors(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn google_workspace() -> ProviderProfile {
    ProviderProfile {
        id: "google-workspace".to_string(),
        display_name: "Google Workspace".to_string(),
        mx_records: vec![
            MxTemplate::new(1, "aspmx.l.google.com"),
            MxTemplate::new(5, "alt1.aspmx.l.google.com"),
            MxTemplate::new(5, "alt2.aspmx.l.google.com"),
            MxTemplate::new(10, "alt3.aspmx.l.google.com"),
            MxTemplate::new(10, "alt4.aspmx.l.google.com"),
        ],
        spf_include: "include:_spf.google.com".to_string(),
        dkim_selectors: selectors(&["google"]),
        additional_records: vec![AdditionalRecord::new(
            RecordType::Txt,
            "@",
            "google-site-verification={verification_token}",
            "Google site verification",
        )],
    }
}

fn microsoft_365() -> ProviderProfile {
    ProviderProfile {
        id: "microsoft-365".to_string(),
        display_name: "Microsoft 365".to_string(),
        mx_records: vec![MxTemplate::new(
            0,
            "{domain}.mail.protection.outlook.com",
        )],
        spf_include: "include:spf.protection.outlook.com".to_string(),
        dkim_selectors: selectors(&["selector1", "selector2"]),
        additional_records: vec![
            AdditionalRecord::new(
                RecordType::Cname,
                "autodiscover",
                "autodiscover.outlook.com",
                "Outlook autodiscover",
            ),
            AdditionalRecord::new(
                RecordType::Txt,
                "@",
                "MS={verification_token}",
                "Microsoft 365 domain verification",
            ),
        ],
    }
}

fn sendgrid() -> ProviderProfile {
    ProviderProfile {
        id: "sendgrid".to_string(),
        display_name: "SendGrid".to_string(),
        mx_records: vec![MxTemplate::new(10, "mx.sendgrid.net")],
        spf_include: "include:sendgrid.net".to_string(),
        dkim_selectors: selectors(&["s1", "s2"]),
        additional_records: vec![AdditionalRecord::new(
            RecordType::Cname,
            "em",
            "u{verification_token}.wl.sendgrid.net",
            "SendGrid link branding and return path",
        )],
    }
}

fn mailgun() -> ProviderProfile {
    ProviderProfile {
        id: "mailgun".to_string(),
        display_name: "Mailgun".to_string(),
        mx_records: vec![
            MxTemplate::new(10, "mxa.mailgun.org"),
            MxTemplate::new(10, "mxb.mailgun.org"),
        ],
        spf_include: "include:mailgun.org".to_string(),
        dkim_selectors: selectors(&["smtp"]),
        additional_records: vec![AdditionalRecord::new(
            RecordType::Cname,
            "email",
            "mailgun.org",
            "Mailgun open and click tracking",
        )],
    }
}

fn custom() -> ProviderProfile {
    ProviderProfile {
        id: "custom".to_string(),
        display_name: "Custom / self-hosted".to_string(),
        mx_records: vec![MxTemplate::new(10, "mail.{fqdn}")],
        spf_include: "mx".to_string(),
        dkim_selectors: selectors(&["default"]),
        additional_records: vec![],
    }
}

/// Profiles shipped with the crate, in display order.
pub(crate) fn builtin_profiles() -> Vec<ProviderProfile> {
    vec![
        google_workspace(),
        microsoft_365(),
        sendgrid(),
        mailgun(),
        custom(),
    ]
}
