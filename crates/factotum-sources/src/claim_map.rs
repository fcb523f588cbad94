//! Static mapping from fact-checker claim ids to database paths.
//!
//! This table is the single routing authority for propagation: a claim id
//! absent from it is skipped, never an error. It lives here as a compiled
//! constant so it can be unit-tested independently of the propagation logic.

use crate::database::Database;

/// claim id → (database, dotted path) for every claim the checker can emit.
const CLAIM_PATHS: &[(&str, Database, &str)] = &[
    // WEBSITE_CONTENT: macroeconomic scorecard
    ("c0100", Database::WebsiteContent, "national.macroeconomicScorecard.economicActivity.realGdpGrowth"),
    ("c0101", Database::WebsiteContent, "national.macroeconomicScorecard.labourAndCosts.unemploymentRate"),
    ("c0102", Database::WebsiteContent, "national.macroeconomicScorecard.fiscalPricesMarkets.hicpInflation"),
    // WEBSITE_CONTENT: digital infrastructure
    ("c0200", Database::WebsiteContent, "national.digitalInfrastructure.ftthPenetration"),
    ("c0201", Database::WebsiteContent, "national.digitalInfrastructure.ftthPenetration.lisbonMetroCoverage"),
    ("c0202", Database::WebsiteContent, "national.digitalInfrastructure.fiveGCoverage"),
    ("c0203", Database::WebsiteContent, "national.digitalInfrastructure.subseaCables"),
    ("c0204", Database::WebsiteContent, "national.digitalInfrastructure.subseaCables.cables[EllaLink]"),
    ("c0205", Database::WebsiteContent, "national.digitalInfrastructure.subseaCables.cables[2Africa]"),
    ("c0206", Database::WebsiteContent, "national.digitalInfrastructure.dataCenters.microsoft"),
    ("c0210", Database::WebsiteContent, "national.digitalInfrastructure.fixedBroadband.euRanking"),
    // MASTER: city graduate claims
    ("c0001", Database::Master, "cities.lisbon.stemGraduates"),
    ("c0002", Database::Master, "cities.porto.stemGraduates"),
    ("c0003", Database::Master, "cities.braga.stemGraduates"),
    ("c0004", Database::Master, "cities.guimaraes.stemGraduates"),
    ("c0005", Database::Master, "cities.coimbra.stemGraduates"),
    ("c0006", Database::Master, "cities.aveiro.stemGraduates"),
    ("c0007", Database::Master, "cities.covilha.stemGraduates"),
    ("c0008", Database::Master, "cities.evora.stemGraduates"),
    ("c0009", Database::Master, "cities.faro.stemGraduates"),
    ("c0010", Database::Master, "cities.setubal.stemGraduates"),
    // CITY_PROFILES: startup valuations
    ("c0400", Database::CityProfiles, "cities.lisbon.ecosystem.techCompanies[Talkdesk]"),
    ("c0401", Database::CityProfiles, "cities.lisbon.ecosystem.techCompanies[OutSystems]"),
    ("c0402", Database::CityProfiles, "cities.lisbon.ecosystem.techCompanies[Remote]"),
    ("c0403", Database::CityProfiles, "cities.lisbon.ecosystem.techCompanies[Sword Health]"),
    // WEBSITE_CONTENT: workforce statistics
    ("c0500", Database::WebsiteContent, "national.workforceStatistics.techWorkforceTotal"),
    ("c0501", Database::WebsiteContent, "national.workforceStatistics.techWorkforceTotal.official"),
    ("c0502", Database::WebsiteContent, "national.workforceStatistics.ictEmployment"),
    ("c0503", Database::WebsiteContent, "national.hiringInsights.ageDistribution.medianAge"),
    ("c0504", Database::WebsiteContent, "national.hiringInsights.educationLevel.bachelorsOrHigher"),
    ("c0505", Database::WebsiteContent, "national.hiringInsights.timeToHire"),
    ("c0506", Database::WebsiteContent, "national.hiringInsights.retention.tenure"),
];

/// Look up the target location for a claim id.
pub fn lookup(claim_id: &str) -> Option<(Database, &'static str)> {
    CLAIM_PATHS
        .iter()
        .find(|(id, _, _)| *id == claim_id)
        .map(|(_, database, path)| (*database, *path))
}
