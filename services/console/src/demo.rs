use crate::infra::{FixedFilePicker, InMemoryDocumentStore, InMemoryIdentityService};
use crate::jobs::print_posting;
use clap::Args;
use std::sync::Arc;
use talent_board::config::AppConfig;
use talent_board::error::AppError;
use talent_board::workflows::auth::{
    AccountType, AuthOutcome, AuthSession, Identity, RegistrationField, RegistrationForm,
};
use talent_board::workflows::listing::{BoardTab, JobBoard};
use talent_board::workflows::profile::{ProfileForm, RESUME_HINT};
use talent_board::workflows::vacancy::{VacancyDraft, VacancyPublisher};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// E-mail used to register the demo account.
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Display name for the demo account.
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Resume file name handed back by the picker. Omit to simulate a dismissed picker.
    #[arg(long)]
    pub(crate) resume: Option<String>,
    /// Register as a company account.
    #[arg(long)]
    pub(crate) company: bool,
    /// Skip the vacancy publishing portion of the demo.
    #[arg(long)]
    pub(crate) skip_publish: bool,
}

const DEMO_PASSWORD: &str = "segredo123";

pub(crate) async fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        email,
        name,
        resume,
        company,
        skip_publish,
    } = args;

    let email = email.unwrap_or_else(|| "ana.souza@empresa.com".to_string());
    let name = name.unwrap_or_else(|| "Ana Souza".to_string());
    info!(%email, company, "starting demo session");

    let identity_service = Arc::new(InMemoryIdentityService::default());
    let session = AuthSession::new(identity_service);

    println!("== Cadastro ==");
    let mut form = RegistrationForm::new(config.accounts);
    form.set_name(name.as_str());
    form.set_email(email.as_str());
    form.set_phone("88999991234");
    form.set_password("abc");
    form.set_confirm_password("abd");
    if form.submit().is_none() {
        for field in [RegistrationField::Password, RegistrationField::ConfirmPassword] {
            if let Some(message) = form.error(field) {
                println!("  {field:?}: {message}");
            }
        }
    }

    form.set_password(DEMO_PASSWORD);
    form.set_confirm_password(DEMO_PASSWORD);
    form.set_account_type(if company {
        AccountType::Company
    } else {
        AccountType::Candidate
    });

    let Some(request) = form.submit() else {
        println!("  Cadastro inválido; encerrando demo.");
        return Ok(());
    };
    println!(
        "  Telefone {} | conta {}",
        form.phone(),
        request.account_type.label()
    );
    request.send(&session).finished().await;
    let Some(user) = report_outcome(&session) else {
        return Ok(());
    };

    session.sign_out().await;
    println!("  Estado após sair: {}", session.state().label());

    println!();
    println!("== Login ==");
    session.sign_in(&email, "").settled().await;
    report_outcome(&session);
    session.sign_in(&email, "senha-errada").settled().await;
    report_outcome(&session);
    session.sign_in(&email, DEMO_PASSWORD).settled().await;
    report_outcome(&session);

    println!();
    println!("== Vagas ==");
    let mut board = JobBoard::seeded(&config.board);
    board.toggle_job_type("CLT");
    board.mark_applied("Repositor de Mercadorias");
    let view = board.view();
    println!("  {}", view.tab_labels().join(" | "));
    for tab in BoardTab::ordered() {
        println!("  {}:", tab.title());
        for posting in view.tab(tab) {
            print!("  ");
            print_posting(posting);
        }
    }

    println!();
    println!("== Perfil ==");
    let mut profile = ProfileForm::default();
    profile.set_full_name(user.display_name.clone().unwrap_or_else(|| name.clone()));
    profile.set_email(user.email.as_str());
    if !profile.set_tax_id("123.456.789-01") {
        println!("  CPF com pontuação ignorado");
    }
    profile.set_tax_id("12345678901");
    let picker = FixedFilePicker { file_name: resume };
    if !profile.attach_resume(&picker).await {
        println!("  Nenhum currículo selecionado ({RESUME_HINT})");
    }
    match profile.save() {
        Ok(snapshot) => println!("  {}", serde_json::to_string(&snapshot)?),
        Err(err) => println!("  {err}"),
    }

    if skip_publish {
        return Ok(());
    }

    println!();
    println!("== Publicar vaga ==");
    publish_demo_vacancies(config, &user).await
}

fn report_outcome(session: &AuthSession) -> Option<Identity> {
    match session.acknowledge() {
        Some(AuthOutcome::SignedIn(user)) => {
            println!(
                "  Bem-vindo, {} ({})",
                user.display_name.as_deref().unwrap_or(&user.email),
                user.uid
            );
            Some(user)
        }
        Some(AuthOutcome::Failed(message)) => {
            println!("  Erro: {message}");
            None
        }
        None => None,
    }
}

async fn publish_demo_vacancies(config: &AppConfig, owner: &Identity) -> Result<(), AppError> {
    let store = Arc::new(InMemoryDocumentStore::default());
    let publisher = VacancyPublisher::new(store.clone(), config.publishing.clone());

    let incomplete = VacancyDraft {
        title: "Analista de Dados".to_string(),
        ..VacancyDraft::default()
    };
    if let Err(err) = publisher.publish(incomplete, owner).await {
        println!("  {err}");
    }

    let draft = VacancyDraft {
        title: "Analista de Dados".to_string(),
        description: "Modelagem e painéis para o time comercial".to_string(),
        location: "Fortaleza".to_string(),
        contract_type: "CLT".to_string(),
        salary_negotiable: true,
        salary_range: String::new(),
    };
    let id = publisher.publish(draft, owner).await?;
    println!("  Vaga publicada: {}", id.0);

    for (id, record) in store.documents(publisher.collection()) {
        println!(
            "  {}/{} {}",
            publisher.collection(),
            id.0,
            serde_json::to_string(&record)?
        );
    }
    Ok(())
}
