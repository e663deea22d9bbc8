//! Wiring and command handlers.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use reqcheck_application::ports::{Clock, Notifier};
use reqcheck_application::{
    HistoryRecorder, RequestDispatcher, SendCompletion, SendPipeline, Session, SessionPorts,
};
use reqcheck_domain::{RecordId, RequestTemplate};
use reqcheck_infrastructure::{
    AppConfig, DirectoryVariableFiles, FileHistoryStore, JsonFileStore, ReqwestTransport,
    SystemClock,
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::cli::{Command, SendArgs};

/// A workspace opened for one command.
pub struct App {
    session: Session,
    pipeline: SendPipeline<ReqwestTransport>,
    completions: UnboundedReceiver<SendCompletion>,
    history: HistoryRecorder,
}

impl App {
    /// Builds the adapters for `config` and loads the store.
    ///
    /// A store that cannot be loaded is reported and the session starts
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub async fn open(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

        let mut session = Session::new(SessionPorts {
            store: Arc::new(JsonFileStore::new(config.store_path())),
            files: Arc::new(DirectoryVariableFiles::new(config.variables_path())),
            notifier: Arc::clone(&notifier),
            clock: Arc::clone(&clock),
        });
        // Already reported; the session is empty.
        let _ = session.load_from_store().await;

        let transport = ReqwestTransport::new(config.request_timeout(), &config.user_agent)
            .context("failed to create HTTP client")?;
        let history = HistoryRecorder::new(Arc::new(FileHistoryStore::new(config.history_path())));
        let (pipeline, completions) = SendPipeline::new(
            RequestDispatcher::new(Arc::new(transport)),
            history.clone(),
            clock,
            notifier,
            config.display_limit,
        );

        Ok(Self {
            session,
            pipeline,
            completions,
            history,
        })
    }

    /// Runs one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or output cannot be written.
    pub async fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List => self.list(out),
            Command::Show { index } => self.show(index, out),
            Command::Send(args) => self.send(args, out).await,
            Command::Delete { index } => {
                let removed = self.session.delete_request(index).await?;
                writeln!(out, "Deleted {} {}", removed.method, removed.url)?;
                Ok(())
            }
            Command::Vars => {
                for (name, value) in self.session.variables().list() {
                    writeln!(out, "{name} = {value}")?;
                }
                Ok(())
            }
            Command::VarSet { name, value } => {
                self.session.set_variable(&name, &value).await?;
                Ok(())
            }
            Command::VarDelete { name } => {
                if self.session.delete_variable(&name).await.is_none() {
                    bail!("No variable named {name}");
                }
                Ok(())
            }
            Command::History { record } => {
                let contents = self.history.open(&RecordId::parse(&record)).await?;
                write!(out, "{contents}")?;
                Ok(())
            }
        }
    }

    fn list(&self, out: &mut impl Write) -> Result<()> {
        for (index, template) in self.session.catalog().list().iter().enumerate() {
            writeln!(
                out,
                "{index}\t{}\t{}\t{}",
                template.method, template.description, template.url
            )?;
        }
        Ok(())
    }

    fn show(&self, index: usize, out: &mut impl Write) -> Result<()> {
        let template = self
            .session
            .catalog()
            .get(index)
            .with_context(|| format!("No request at index {index}"))?;
        write!(
            out,
            "Method: {}\nDescription: {}\nURL: {}\nHeaders:\n{}\nBody:\n{}\n",
            template.method, template.description, template.url, template.headers, template.body
        )?;
        Ok(())
    }

    async fn send(&mut self, args: SendArgs, out: &mut impl Write) -> Result<()> {
        let base = match args.index {
            Some(index) => self
                .session
                .catalog()
                .get(index)
                .cloned()
                .with_context(|| format!("No request at index {index}"))?,
            None => RequestTemplate::default(),
        };
        let template = apply_args(base, &args).await?;

        let prepared = self.session.prepare_send(args.index, template).await?;
        tracing::debug!(index = prepared.index, "send prepared");
        let task = self.pipeline.launch(prepared);

        let completion = self
            .completions
            .recv()
            .await
            .context("send task ended without a result")?;
        task.await.context("send task failed")?;

        writeln!(out, "{}", completion.info_line)?;
        writeln!(out, "{}", completion.display_body)?;
        if completion.truncated
            && let Some(record) = &completion.record
        {
            writeln!(out, "Full response: reqcheck history {record}")?;
        }
        Ok(())
    }
}

/// Overlays the given flags on `template`. Text from flags is trimmed.
async fn apply_args(mut template: RequestTemplate, args: &SendArgs) -> Result<RequestTemplate> {
    if let Some(method) = args.method {
        template.method = method;
    }
    if let Some(description) = &args.description {
        description.trim().clone_into(&mut template.description);
    }
    if let Some(url) = &args.url {
        url.trim().clone_into(&mut template.url);
    }
    if !args.headers.is_empty() {
        template.headers = args.headers.join("\n").trim().to_string();
    }
    if let Some(body) = &args.body {
        body.trim().clone_into(&mut template.body);
    } else if let Some(path) = &args.body_file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        template.body = content.trim().to_string();
    }
    Ok(template)
}
