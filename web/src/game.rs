use crate::api::{self, JServiceClient};
use crate::utils::js_random_seed;
use clap::Args;
use clap::builder::RangedU64ValueParser;
use clueboard_core as game;
use game::RevealState;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::Instant;
use yew::prelude::*;

const START_LABEL: &str = "Play Game!";
const LOADING_LABEL: &str = "Loading...";
const FAILURE_MESSAGE: &str = "Something went wrong... try again later!";

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Categories per game
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_CATEGORIES,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_CLUES_PER_CATEGORY,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub clues: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Per request timeout in milliseconds
    #[arg(long, default_value_t = api::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u32,

    /// Extra attempts for a failed request
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_FETCH_RETRIES)]
    pub retries: u8,
}

impl GameProps {
    fn board_config(&self) -> game::BoardConfig {
        game::BoardConfig::new(self.categories, self.clues).with_fetch_retries(self.retries)
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RevealOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Built(Result<game::Board, game::BuildAborted>),
    Reveal(game::CellId),
}

fn cell_class(state: RevealState) -> Classes {
    classes!(
        "clue",
        match state {
            RevealState::Hidden => None,
            RevealState::Question => Some("question"),
            RevealState::Answer => Some("answer"),
        }
    )
}

/// What the page shows around the board for a session state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Layout {
    loader: bool,
    banner: bool,
    board: bool,
    locked: bool,
}

fn layout_for(status: &game::SessionStatus, has_board: bool) -> Layout {
    use game::SessionStatus::*;
    match status {
        Loading => Layout {
            loader: true,
            banner: false,
            board: false,
            locked: true,
        },
        Failed(_) => Layout {
            loader: false,
            banner: true,
            board: has_board,
            locked: true,
        },
        Idle => Layout {
            loader: false,
            banner: false,
            board: has_board,
            locked: true,
        },
        Ready => Layout {
            loader: false,
            banner: false,
            board: has_board,
            locked: !has_board,
        },
    }
}

fn start_label(loading: bool) -> &'static str {
    if loading { LOADING_LABEL } else { START_LABEL }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::CellId,
    state: RevealState,
    text: AttrValue,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellId>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        cell,
        state,
        text,
        locked,
        callback,
    } = props.clone();

    let mut class = cell_class(state);
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if locked {
            return;
        }
        log::trace!("{} clicked", cell);
        callback.emit(cell);
    });

    html! {
        <td {class} {onclick}>{text.to_string()}</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    client: JServiceClient,
    props: GameProps,
}

impl GameView {
    fn start_build(&mut self, ctx: &Context<Self>) -> bool {
        let config = self.props.board_config();
        if let Err(err) = config.validate() {
            log::error!("invalid board config: {}", err);
            return false;
        }
        if !self.session.begin_build() {
            return false;
        }

        let builder = game::BoardBuilder::new(config);
        let client = self.client.clone();
        let seed = self.props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let started_at = Instant::now();
            let result = builder.build(&client, &mut rng).await;
            log::info!(
                "build {} after {:?}",
                if result.is_ok() { "finished" } else { "aborted" },
                started_at.elapsed()
            );
            Msg::Built(result)
        });
        true
    }

    fn view_board(&self, ctx: &Context<Self>, board: &game::Board, locked: bool) -> Html {
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <table class={classes!(locked.then_some("stale"))}>
                <thead>
                    <tr class="header">
                        { for board.titles().map(|title| html! { <th class="title">{title.to_string()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..board.clue_count()).map(|row| html! {
                            <tr>
                                {
                                    for board.row(row).map(|(cell, clue)| match clue {
                                        Some(clue) => html! {
                                            <CellView
                                                {cell}
                                                state={clue.state()}
                                                text={AttrValue::from(clue.content().text().to_string())}
                                                {locked}
                                                callback={callback.clone()}
                                            />
                                        },
                                        None => html! { <td class="empty"/> },
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props().clone();
        Self {
            session: game::GameSession::new(),
            client: JServiceClient::new(&props.api_base, props.timeout_ms),
            props,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start_build(ctx),
            Built(result) => {
                self.session.finish_build(result);
                if log::log_enabled!(log::Level::Trace) {
                    match serde_json::to_string(&self.session.snapshot()) {
                        Ok(dump) => log::trace!("session: {}", dump),
                        Err(err) => log::trace!("session dump failed: {}", err),
                    }
                }
                true
            }
            Reveal(cell) => {
                log::debug!("reveal cell: {}", cell);
                let outcome = self.session.reveal(cell);
                if let Err(err) = &outcome {
                    log::warn!("reveal {} ignored: {}", cell, err);
                }
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.session.status().is_loading();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        let layout = layout_for(self.session.status(), self.session.board().is_some());
        let board = self
            .session
            .board()
            .filter(|_| layout.board)
            .map(|board| self.view_board(ctx, board, layout.locked))
            .unwrap_or_default();

        let body = html! {
            <>
                if layout.loader {
                    <div class="loader"/>
                }
                if layout.banner {
                    <p class="error">{FAILURE_MESSAGE}</p>
                }
                {board}
            </>
        };

        html! {
            <div class="clueboard">
                <nav>
                    <button {onclick} disabled={loading}>{start_label(loading)}</button>
                </nav>
                <div id="container">{body}</div>
            </div>
        }
    }
}
