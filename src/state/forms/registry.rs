//! Declarative registry of wizard steps and per-field requirement rules
//!
//! Each data-entry step declares its fields in display order. The validator
//! walks this registry, so missing-field messages come out in declaration
//! order, matching what the portal backend reports.

/// When a field must be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Always required
    Always,
    /// Never required (may still be submitted when filled)
    Optional,
    /// Required only while another field holds a specific value
    IfEquals {
        field: &'static str,
        value: &'static str,
    },
}

/// A single field as the registry declares it
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub requirement: Requirement,
}

/// One wizard step and its fields
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub number: u8,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Four data-entry steps plus the review step
pub const TOTAL_STEPS: u8 = 5;

pub const TITLE_OPTIONS: &[&str] = &["Dr.", "Mr.", "Ms.", "Mrs.", "Prof."];
pub const GENDER_OPTIONS: &[&str] = &["Female", "Male"];
pub const EDUCATION_OPTIONS: &[&str] = &[
    "Bachelor's Degree",
    "Master's Degree",
    "PhD/Doctorate",
    "Post-Doctoral Training",
    "Other",
];
pub const CONTEXT_OPTIONS: &[&str] = &[
    "Affiliated with a university, research institution",
    "Funded by a research grant or innovation project",
    "Working in a healthcare facility",
    "Working in a government institution",
    "Other",
];
pub const CONTRIBUTION_OPTIONS: &[&str] = &[
    "Technical Support",
    "Research & Analysis",
    "Policy Development",
    "Capacity Building",
    "Other",
];
pub const PROJECT_TYPE_OPTIONS: &[&str] = &[
    "Independent Project",
    "Contribution to an Ongoing Ministry of Health Project",
];
pub const PROJECT_AREA_OPTIONS: &[&str] = &[
    "Biomedical Research and Innovation",
    "Health Workforce Development",
    "Public Health Surveillance",
    "Health Financing, Economics and Supply Chain",
    "Digital Health and Artificial Intelligence",
    "Other",
];
pub const FUNDING_SECURED_OPTIONS: &[&str] = &["Yes", "No"];

const fn required(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        requirement: Requirement::Always,
    }
}

const fn optional(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        requirement: Requirement::Optional,
    }
}

const fn required_if(
    name: &'static str,
    label: &'static str,
    field: &'static str,
    value: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        requirement: Requirement::IfEquals { field, value },
    }
}

static STEP_1: &[FieldSpec] = &[
    required("title", "Title"),
    required("firstName", "First Name"),
    optional("middleName", "Middle Name"),
    required("lastName", "Last Name"),
    required("gender", "Gender"),
    required("email", "Email Address"),
    required("nationality", "Nationality"),
    required("countryOfResidence", "Country of Residence"),
    required("phone", "Phone Number"),
    required("address", "Address"),
];

static STEP_2: &[FieldSpec] = &[
    required("workplace", "Workplace"),
    required("position", "Position"),
    required("educationLevel", "Education Level"),
    required_if(
        "otherEducation",
        "Other Education Level",
        "educationLevel",
        "Other",
    ),
];

static STEP_3: &[FieldSpec] = &[
    required("professionalContext", "Professional Context"),
    required_if(
        "otherContext",
        "Other Professional Context",
        "professionalContext",
        "Other",
    ),
    required("expectedContribution", "Expected Contribution"),
    required_if(
        "otherContribution",
        "Other Expected Contribution",
        "expectedContribution",
        "Other",
    ),
];

static STEP_4: &[FieldSpec] = &[
    required("projectType", "Project Type"),
    required("projectArea", "Project Area"),
    required_if(
        "otherProjectArea",
        "Other Project Area",
        "projectArea",
        "Other",
    ),
    required("projectSummary", "Project Summary"),
    required("projectMotivation", "Project Motivation"),
    required("estimatedBudget", "Estimated Budget"),
    required("fundingSources", "Funding Sources"),
    required("fundingSecured", "Funding Secured"),
    required_if("fundingProof", "Proof of Funding", "fundingSecured", "Yes"),
    required_if("fundingPlan", "Funding Plan", "fundingSecured", "No"),
    required("sustainabilityPlan", "Sustainability Plan"),
    optional("cvFile", "CV/Resume"),
];

static STEPS: &[StepDefinition] = &[
    StepDefinition {
        number: 1,
        title: "Personal and Contact Information",
        fields: STEP_1,
    },
    StepDefinition {
        number: 2,
        title: "Career and Educational Background",
        fields: STEP_2,
    },
    StepDefinition {
        number: 3,
        title: "Fellowship Context and Contribution",
        fields: STEP_3,
    },
    StepDefinition {
        number: 4,
        title: "Project and Funding",
        fields: STEP_4,
    },
];

/// Look up the definition for a data-entry step (1..=4).
/// The review step (5) declares no fields of its own.
pub fn step_definition(step: u8) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|d| d.number == step)
}

/// All data-entry step definitions in order
pub fn data_entry_steps() -> &'static [StepDefinition] {
    STEPS
}
