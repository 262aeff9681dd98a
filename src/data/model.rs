use serde::Deserialize;

// ---------------------------------------------------------------------------
// PharmaceuticalRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// One LCA study record, renamed from the CSV's human-readable column labels
/// to the camel-case property names the front-end consumes.
///
/// Every field carries `#[serde(default)]`: a column missing from the header
/// and a blank cell both come out as `""`, so no field is ever absent in the
/// emitted module.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PharmaceuticalRecord {
    #[serde(rename = "Data source topic", default)]
    pub data_source_topic: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author(s)", default)]
    pub authors: String,
    #[serde(rename = "Publication year", default)]
    pub publication_year: String,
    #[serde(rename = "Publication date", default)]
    pub publication_date: String,
    #[serde(rename = "Healthcare field", default)]
    pub healthcare_field: String,
    #[serde(rename = "Specialty", default)]
    pub specialty: String,
    #[serde(rename = "Citation", default)]
    pub citation: String,
    #[serde(rename = "Publication type", default)]
    pub publication_type: String,
    #[serde(rename = "Journal", default)]
    pub journal: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "Abstract", default)]
    pub abstract_text: String,
    #[serde(rename = "Number of products or processes", default)]
    pub number_of_products: String,
    #[serde(rename = "Products and processes studied", default)]
    pub products_and_processes: String,
    #[serde(rename = "Year of data collection", default)]
    pub year_of_data_collection: String,
    #[serde(rename = "Author institution(s)", default)]
    pub author_institutions: String,
    #[serde(rename = "Institution(s) assessed", default)]
    pub institutions_assessed: String,
    #[serde(rename = "Country(s) assessed", default)]
    pub countries_assessed: String,
    #[serde(rename = "Region(s) assessed", default)]
    pub regions_assessed: String,
    #[serde(rename = "Income category of country assessed", default)]
    pub income_category: String,
    #[serde(rename = "Scale", default)]
    pub scale: String,
    #[serde(rename = "Functional unit", default)]
    pub functional_unit: String,
    #[serde(rename = "System boundary", default)]
    pub system_boundary: String,
    #[serde(rename = "Included stages or activities", default)]
    pub included_stages: String,
    #[serde(rename = "Impact categories", default)]
    pub impact_categories: String,
    #[serde(rename = "Life cycle accounting method", default)]
    pub life_cycle_accounting_method: String,
    #[serde(rename = "Activity data (Emissions factor type)", default)]
    pub activity_data_type: String,
    #[serde(rename = "Methodological approach as reported by data source", default)]
    pub methodological_approach: String,
    #[serde(rename = "Standard(s)", default)]
    pub standards: String,
    #[serde(rename = "Inventory database(s)", default)]
    pub inventory_databases: String,
    #[serde(rename = "Characterization model(s)", default)]
    pub characterization_models: String,
    #[serde(rename = "LCA software", default)]
    pub lca_software: String,
    #[serde(rename = "Input-output model/database(s)", default)]
    pub input_output_models: String,
    #[serde(rename = "Source of financial activity data", default)]
    pub source_of_financial_data: String,
    #[serde(rename = "Analyses", default)]
    pub analyses: String,
    #[serde(rename = "Competing interests statement", default)]
    pub competing_interests: String,
    #[serde(rename = "Funding declaration", default)]
    pub funding_declaration: String,
    #[serde(rename = "Record created by", default)]
    pub record_created_by: String,
    #[serde(rename = "Record created", default)]
    pub record_created: String,
    #[serde(rename = "Last Modified", default)]
    pub last_modified: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Data source code", default)]
    pub data_source_code: String,
    #[serde(rename = "Verification status", default)]
    pub verification_status: String,
    #[serde(rename = "Corresponding author(s)", default)]
    pub corresponding_authors: String,
    #[serde(rename = "Corresponding author's email address", default)]
    pub corresponding_author_email: String,
}

/// TypeScript property names in emission order. `fields()` must stay aligned
/// with this list; the `fields_align_with_ts_fields` test pins that down.
pub const TS_FIELDS: [&str; PharmaceuticalRecord::FIELD_COUNT] = [
    "dataSourceTopic",
    "title",
    "authors",
    "publicationYear",
    "publicationDate",
    "healthcareField",
    "specialty",
    "citation",
    "publicationType",
    "journal",
    "url",
    "abstract",
    "numberOfProducts",
    "productsAndProcesses",
    "yearOfDataCollection",
    "authorInstitutions",
    "institutionsAssessed",
    "countriesAssessed",
    "regionsAssessed",
    "incomeCategory",
    "scale",
    "functionalUnit",
    "systemBoundary",
    "includedStages",
    "impactCategories",
    "lifeCycleAccountingMethod",
    "activityDataType",
    "methodologicalApproach",
    "standards",
    "inventoryDatabases",
    "characterizationModels",
    "lcaSoftware",
    "inputOutputModels",
    "sourceOfFinancialData",
    "analyses",
    "competingInterests",
    "fundingDeclaration",
    "recordCreatedBy",
    "recordCreated",
    "lastModified",
    "notes",
    "dataSourceCode",
    "verificationStatus",
    "correspondingAuthors",
    "correspondingAuthorEmail",
];

impl PharmaceuticalRecord {
    pub const FIELD_COUNT: usize = 45;

    /// The record's `(ts_property_name, value)` pairs in emission order.
    pub fn fields(&self) -> [(&'static str, &str); Self::FIELD_COUNT] {
        [
            ("dataSourceTopic", self.data_source_topic.as_str()),
            ("title", self.title.as_str()),
            ("authors", self.authors.as_str()),
            ("publicationYear", self.publication_year.as_str()),
            ("publicationDate", self.publication_date.as_str()),
            ("healthcareField", self.healthcare_field.as_str()),
            ("specialty", self.specialty.as_str()),
            ("citation", self.citation.as_str()),
            ("publicationType", self.publication_type.as_str()),
            ("journal", self.journal.as_str()),
            ("url", self.url.as_str()),
            ("abstract", self.abstract_text.as_str()),
            ("numberOfProducts", self.number_of_products.as_str()),
            ("productsAndProcesses", self.products_and_processes.as_str()),
            ("yearOfDataCollection", self.year_of_data_collection.as_str()),
            ("authorInstitutions", self.author_institutions.as_str()),
            ("institutionsAssessed", self.institutions_assessed.as_str()),
            ("countriesAssessed", self.countries_assessed.as_str()),
            ("regionsAssessed", self.regions_assessed.as_str()),
            ("incomeCategory", self.income_category.as_str()),
            ("scale", self.scale.as_str()),
            ("functionalUnit", self.functional_unit.as_str()),
            ("systemBoundary", self.system_boundary.as_str()),
            ("includedStages", self.included_stages.as_str()),
            ("impactCategories", self.impact_categories.as_str()),
            (
                "lifeCycleAccountingMethod",
                self.life_cycle_accounting_method.as_str(),
            ),
            ("activityDataType", self.activity_data_type.as_str()),
            ("methodologicalApproach", self.methodological_approach.as_str()),
            ("standards", self.standards.as_str()),
            ("inventoryDatabases", self.inventory_databases.as_str()),
            ("characterizationModels", self.characterization_models.as_str()),
            ("lcaSoftware", self.lca_software.as_str()),
            ("inputOutputModels", self.input_output_models.as_str()),
            ("sourceOfFinancialData", self.source_of_financial_data.as_str()),
            ("analyses", self.analyses.as_str()),
            ("competingInterests", self.competing_interests.as_str()),
            ("fundingDeclaration", self.funding_declaration.as_str()),
            ("recordCreatedBy", self.record_created_by.as_str()),
            ("recordCreated", self.record_created.as_str()),
            ("lastModified", self.last_modified.as_str()),
            ("notes", self.notes.as_str()),
            ("dataSourceCode", self.data_source_code.as_str()),
            ("verificationStatus", self.verification_status.as_str()),
            ("correspondingAuthors", self.corresponding_authors.as_str()),
            (
                "correspondingAuthorEmail",
                self.corresponding_author_email.as_str(),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Topic id derivation
// ---------------------------------------------------------------------------

/// The character class of the JavaScript `\s`: WhiteSpace plus
/// LineTerminator. Not `char::is_whitespace`, which disagrees at the edges
/// (U+0085 is Rust-whitespace only, U+FEFF is JS-whitespace only).
fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Derive the lookup id for a data source topic: lower-case, each run of
/// whitespace replaced by a single hyphen. Mirrors the
/// `toLowerCase().replace(/\s+/g, '-')` in the emitted TypeScript helper,
/// leading and trailing runs included.
pub fn topic_id(topic: &str) -> String {
    let mut id = String::with_capacity(topic.len());
    let mut in_whitespace_run = false;
    for ch in topic.chars() {
        if is_js_whitespace(ch) {
            if !in_whitespace_run {
                id.push('-');
                in_whitespace_run = true;
            }
        } else {
            for lower in ch.to_lowercase() {
                id.push(lower);
            }
            in_whitespace_run = false;
        }
    }
    id
}

// ---------------------------------------------------------------------------
// PharmaceuticalDataset – the complete parsed dataset
// ---------------------------------------------------------------------------

/// All records from the source CSV, in source row order.
#[derive(Debug, Clone, Default)]
pub struct PharmaceuticalDataset {
    pub records: Vec<PharmaceuticalRecord>,
}

impl PharmaceuticalDataset {
    pub fn from_records(records: Vec<PharmaceuticalRecord>) -> Self {
        PharmaceuticalDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose topic id equals `id`, or `None` when nothing
    /// matches.
    pub fn get_by_id(&self, id: &str) -> Option<&PharmaceuticalRecord> {
        self.records
            .iter()
            .find(|r| topic_id(&r.data_source_topic) == id)
    }

    /// All records, order and content unchanged.
    pub fn get_all(&self) -> &[PharmaceuticalRecord] {
        &self.records
    }
}
