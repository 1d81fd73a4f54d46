use crate::models::CalculatedEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyGroup {
    pub company_id: String,
    pub company_name: String,
    pub entries: Vec<CalculatedEntry>,
    pub subtotal: f64,
}

/// Partition by company, first-seen order; entries keep input order.
pub fn group_by_company(entries: &[CalculatedEntry]) -> Vec<CompanyGroup> {
    let mut groups: Vec<CompanyGroup> = Vec::new();

    for e in entries {
        match groups.iter_mut().find(|g| g.company_id == e.company_id()) {
            Some(g) => {
                g.subtotal += e.earnings;
                g.entries.push(e.clone());
            }
            None => groups.push(CompanyGroup {
                company_id: e.company_id().to_string(),
                company_name: e.company_name.clone(),
                entries: vec![e.clone()],
                subtotal: e.earnings,
            }),
        }
    }

    groups
}
