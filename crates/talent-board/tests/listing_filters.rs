use std::collections::BTreeSet;

use talent_board::config::BoardConfig;
use talent_board::workflows::listing::{
    parse_leading_salary, seed_postings, BoardTab, FilterCriteria, JobBoard, JobPosting,
    SalaryBounds,
};

fn board() -> JobBoard {
    JobBoard::seeded(&BoardConfig::default())
}

fn titles<'a>(postings: impl IntoIterator<Item = &'a JobPosting>) -> Vec<&'a str> {
    postings.into_iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn empty_selections_leave_only_the_search_predicate() {
    let mut board = board();
    for search in ["", "loja", "CENTRAL", "inexistente"] {
        board.set_search_text(search);
        let needle = search.to_lowercase();
        let expected: Vec<String> = seed_postings()
            .into_iter()
            .filter(|p| {
                needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.company.to_lowercase().contains(&needle)
            })
            .map(|p| p.title)
            .collect();
        let visible: Vec<String> = board.visible().map(|p| p.title.clone()).collect();
        assert_eq!(visible, expected, "search {search:?}");
    }
}

#[test]
fn search_matches_company_names() {
    let mut board = board();
    board.set_search_text("loja");
    assert_eq!(
        titles(board.visible()),
        vec!["Vendedor Interno", "Caixa de Loja"]
    );
}

#[test]
fn applying_moves_posting_between_disjoint_tabs() {
    let mut board = board();
    board.toggle_job_type("CLT");
    let before = titles(board.visible()).len();

    assert_eq!(board.mark_applied("Repositor de Mercadorias"), 1);
    let view = board.view();

    assert!(!titles(view.tab(BoardTab::Available).iter().copied())
        .contains(&"Repositor de Mercadorias"));
    assert_eq!(
        titles(view.tab(BoardTab::Applied).iter().copied()),
        vec!["Repositor de Mercadorias"]
    );

    let available: BTreeSet<_> = titles(view.available.iter().copied()).into_iter().collect();
    let applied: BTreeSet<_> = titles(view.applied.iter().copied()).into_iter().collect();
    assert!(available.is_disjoint(&applied));
    assert_eq!(available.len() + applied.len(), before);
    assert_eq!(view.len(), before);
    assert_eq!(view.tab_labels(), ["Todas (3)", "Candidaturas (1)"]);
}

#[test]
fn applied_postings_still_obey_filters() {
    let mut board = board();
    board.mark_applied("Desenvolvedor Android Pleno");
    board.toggle_location("Quixadá, CE");
    assert_eq!(board.view().count(BoardTab::Applied), 0);

    board.toggle_location("Quixadá, CE");
    assert_eq!(board.view().count(BoardTab::Applied), 1);
}

#[test]
fn salary_text_examples() {
    assert_eq!(parse_leading_salary("R$ 1.800 - R$ 2.500"), Some(1800.0));
    assert_eq!(parse_leading_salary("A combinar"), None);
}

#[test]
fn per_hour_and_negotiable_salaries_stay_visible_by_default() {
    let mut postings = seed_postings();
    postings.push(JobPosting::new(
        "Designer Freelancer",
        "Estúdio Criativo",
        "Autônomo",
        "Remoto",
        "A combinar",
        "15/10/2025",
    ));
    let board = JobBoard::new(postings, &BoardConfig::default());
    let visible = titles(board.visible());
    assert!(visible.contains(&"Professor de Inglês"));
    assert!(visible.contains(&"Designer Freelancer"));
}

#[test]
fn unparsable_salary_survives_any_window() {
    let mut postings = seed_postings();
    postings.push(JobPosting::new(
        "Designer Freelancer",
        "Estúdio Criativo",
        "Autônomo",
        "Remoto",
        "A combinar",
        "15/10/2025",
    ));
    let mut board = JobBoard::new(postings, &BoardConfig::default());
    board.set_salary_bounds(SalaryBounds::new(9_500.0, 10_000.0));
    assert_eq!(titles(board.visible()), vec!["Designer Freelancer"]);
}

#[test]
fn criteria_combine_with_and() {
    let mut board = board();
    board.set_criteria(FilterCriteria {
        search_text: "a".to_string(),
        selected_locations: BTreeSet::from(["Quixadá, CE".to_string()]),
        selected_types: BTreeSet::from(["CLT".to_string(), "Concurso".to_string()]),
        salary_bounds: SalaryBounds::new(1_500.0, 2_000.0),
    });
    assert_eq!(
        titles(board.visible()),
        vec![
            "Vendedor Interno",
            "Repositor de Mercadorias",
            "Garçom / Garçonete"
        ]
    );
}
