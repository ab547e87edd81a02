use interning_core::{
    filter_companies, AppliedType, ApplicationStatus, ClosedType, Company, Filters, Internship,
    SponsorshipType, CLOSED_SENTINEL,
};

fn internship(company: &str, link: &str, description: &str, locations: &[&str]) -> Internship {
    Internship {
        company: company.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        locations: locations.iter().map(|l| l.to_string()).collect(),
    }
}

fn company(name: &str, applied: bool, internships: Vec<Internship>) -> Company {
    Company {
        name: name.to_string(),
        applied,
        status: ApplicationStatus::None,
        internships,
    }
}

/// A: one closed posting in NY. B: one open posting in SF requiring citizenship.
fn sample() -> Vec<Company> {
    vec![
        company(
            "A",
            false,
            vec![internship("A", CLOSED_SENTINEL, "Intern", &["NY"])],
        ),
        company(
            "B",
            false,
            vec![internship("B", "http://x", "SWE 🇺🇸", &["SF"])],
        ),
    ]
}

fn names(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn default_filters_pass_everything_in_order() {
    let companies = sample();
    let visible = filter_companies(&companies, &Filters::default());
    assert_eq!(visible, companies);
}

#[test]
fn not_closed_drops_company_with_only_closed_postings() {
    let filters = Filters {
        closed: ClosedType::No,
        ..Filters::default()
    };
    assert_eq!(names(&filter_companies(&sample(), &filters)), vec!["B"]);
}

#[test]
fn closed_yes_and_no_partition_internships() {
    let mixed = vec![company(
        "Mixed",
        false,
        vec![
            internship("Mixed", "http://a", "Open one", &["Austin"]),
            internship("Mixed", CLOSED_SENTINEL, "Closed one", &["Boston"]),
            internship("Mixed", "http://b", "Open two", &["Remote"]),
        ],
    )];

    let closed = filter_companies(
        &mixed,
        &Filters {
            closed: ClosedType::Yes,
            ..Filters::default()
        },
    );
    let open = filter_companies(
        &mixed,
        &Filters {
            closed: ClosedType::No,
            ..Filters::default()
        },
    );

    let closed = &closed[0].internships;
    let open = &open[0].internships;
    assert_eq!(closed.len() + open.len(), mixed[0].internships.len());
    assert!(closed.iter().all(|i| !open.contains(i)));
    assert!(mixed[0]
        .internships
        .iter()
        .all(|i| closed.contains(i) || open.contains(i)));
}

#[test]
fn sponsorship_filters_only_narrow() {
    let companies = vec![company(
        "C",
        false,
        vec![
            internship("C", "http://1", "Plain", &[]),
            internship("C", "http://2", "Needs citizen 🇺🇸", &[]),
            internship("C", "http://3", "No sponsor 🛂", &[]),
            internship("C", "http://4", "Both 🇺🇸 🛂", &[]),
        ],
    )];

    let run = |sponsorship: SponsorshipType| {
        filter_companies(
            &companies,
            &Filters {
                sponsorship,
                ..Filters::default()
            },
        )
        .into_iter()
        .flat_map(|c| c.internships)
        .map(|i| i.description)
        .collect::<Vec<_>>()
    };

    let all = run(SponsorshipType::All);
    let citizenship = run(SponsorshipType::Citizenship);
    let sponsorship = run(SponsorshipType::Sponsorship);

    assert_eq!(all.len(), 4);
    assert_eq!(citizenship, vec!["Plain", "No sponsor 🛂"]);
    assert_eq!(sponsorship, vec!["Plain", "Needs citizen 🇺🇸"]);
    assert!(citizenship.iter().all(|d| all.contains(d)));
    assert!(sponsorship.iter().all(|d| all.contains(d)));
}

#[test]
fn query_matches_location_case_insensitively() {
    let filters = Filters {
        query: "sf".to_string(),
        ..Filters::default()
    };
    assert_eq!(names(&filter_companies(&sample(), &filters)), vec!["B"]);
}

#[test]
fn query_matches_company_name_and_description() {
    let by_name = Filters {
        query: "a".to_string(),
        ..Filters::default()
    };
    assert_eq!(names(&filter_companies(&sample(), &by_name)), vec!["A"]);

    let by_description = Filters {
        query: "swe".to_string(),
        ..Filters::default()
    };
    assert_eq!(names(&filter_companies(&sample(), &by_description)), vec!["B"]);
}

#[test]
fn query_only_sees_surviving_internships() {
    let companies = vec![company(
        "Acme",
        false,
        vec![
            internship("Acme", "http://a", "Backend", &["Denver"]),
            internship("Acme", CLOSED_SENTINEL, "Frontend", &["Seattle"]),
        ],
    )];
    let filters = Filters {
        closed: ClosedType::No,
        query: "seattle".to_string(),
        ..Filters::default()
    };
    assert!(filter_companies(&companies, &filters).is_empty());
}

#[test]
fn applied_filter_matches_flag_exactly() {
    let companies = vec![
        company("Applied Co", true, vec![internship("Applied Co", "l", "d", &[])]),
        company("Fresh Co", false, vec![internship("Fresh Co", "l", "d", &[])]),
    ];
    let only = |applied: AppliedType| {
        filter_companies(
            &companies,
            &Filters {
                applied,
                ..Filters::default()
            },
        )
    };
    assert_eq!(names(&only(AppliedType::Yes)), vec!["Applied Co"]);
    assert_eq!(names(&only(AppliedType::No)), vec!["Fresh Co"]);
    assert_eq!(only(AppliedType::All).len(), 2);
}

#[test]
fn applied_yes_with_nothing_applied_is_empty() {
    let filters = Filters {
        applied: AppliedType::Yes,
        ..Filters::default()
    };
    assert!(filter_companies(&sample(), &filters).is_empty());
}

#[test]
fn reversal_is_positional_and_an_involution() {
    let companies = vec![
        company("One", false, vec![internship("One", "l", "d", &[])]),
        company("Two", false, vec![internship("Two", "l", "d", &[])]),
        company("Three", false, vec![internship("Three", "l", "d", &[])]),
    ];
    let reversed = filter_companies(
        &companies,
        &Filters {
            reversed: true,
            ..Filters::default()
        },
    );
    assert_eq!(names(&reversed), vec!["Three", "Two", "One"]);

    let twice = filter_companies(
        &reversed,
        &Filters {
            reversed: true,
            ..Filters::default()
        },
    );
    assert_eq!(twice, companies);
}

#[test]
fn membership_is_conjunction_of_predicates() {
    let companies = vec![
        company(
            "Open Applied",
            true,
            vec![internship("Open Applied", "http://o", "Data", &["NYC"])],
        ),
        company(
            "Closed Applied",
            true,
            vec![internship("Closed Applied", CLOSED_SENTINEL, "Data", &["NYC"])],
        ),
        company(
            "Open Fresh",
            false,
            vec![internship("Open Fresh", "http://f", "Data", &["NYC"])],
        ),
        company(
            "Open Applied Elsewhere",
            true,
            vec![internship("Open Applied Elsewhere", "http://e", "Ops", &["LA"])],
        ),
    ];
    let filters = Filters {
        closed: ClosedType::No,
        applied: AppliedType::Yes,
        query: "nyc".to_string(),
        ..Filters::default()
    };
    assert_eq!(
        names(&filter_companies(&companies, &filters)),
        vec!["Open Applied"]
    );
}

#[test]
fn filtering_does_not_touch_input() {
    let companies = sample();
    let before = companies.clone();
    let _ = filter_companies(
        &companies,
        &Filters {
            closed: ClosedType::Yes,
            reversed: true,
            ..Filters::default()
        },
    );
    assert_eq!(companies, before);
}
