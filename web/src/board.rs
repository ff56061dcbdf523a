use crate::answer::{FinalView, QuestionView};
use crate::canvas::{CanvasSurface, surface_point};
use crate::confetti;
use crate::fault::FailureView;
use crate::loader::{Picture, load_picture};
use crate::utils::*;
use gloo::timers::callback::{Interval, Timeout};
use heartswap_core as puzzle;
use puzzle::{
    AdvanceTicket, AssetGate, Burst, ControlOutcome, LoadStatus, PuzzleController, PuzzleError,
    PuzzleSlot, RandomShuffler, Stage, StageTiming,
};
use web_sys::HtmlCanvasElement;
use web_time::Instant;
use yew::prelude::*;

pub(crate) enum Msg {
    PictureLoaded(PuzzleSlot, anyhow::Result<Picture>),
    BoardClick(f64, f64),
    Advance(AdvanceTicket),
    Yes,
    No,
    Reset,
    BurstTick,
    Fault(String),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Force a shuffle seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub timing: StageTiming,
}

enum Phase {
    Loading(AssetGate),
    Failed(PuzzleError),
    Ready(PuzzleController),
}

struct RunningBurst {
    burst: Burst,
    started: Instant,
    _interval: Interval,
}

pub(crate) struct BoardView {
    phase: Phase,
    pictures: [Option<Picture>; 2],
    canvas: NodeRef,
    pending_advance: Option<Timeout>,
    burst: Option<RunningBurst>,
    fault: Option<String>,
}

impl BoardView {
    fn controller(&mut self) -> Option<&mut PuzzleController> {
        match &mut self.phase {
            Phase::Ready(controller) => Some(controller),
            _ => None,
        }
    }

    fn on_picture_loaded(
        &mut self,
        ctx: &Context<Self>,
        slot: PuzzleSlot,
        result: anyhow::Result<Picture>,
    ) -> bool {
        let Phase::Loading(gate) = &mut self.phase else {
            log::warn!("{} arrived after loading finished", slot);
            return false;
        };

        let status = match result {
            Ok(picture) => {
                let status = gate.record_loaded(slot, picture.info);
                self.pictures[slot.index()] = Some(picture);
                status
            }
            Err(err) => gate.record_failed(slot, format!("{:#}", err)),
        };

        match status {
            LoadStatus::Loading => false,
            LoadStatus::Failed(err) => {
                self.phase = Phase::Failed(err);
                true
            }
            LoadStatus::Ready => {
                let BoardProps { seed, timing } = ctx.props().clone();
                let seed = seed.unwrap_or_else(js_random_seed);
                log::debug!("pictures ready, shuffle seed {}", seed);

                let mut controller = PuzzleController::new(RandomShuffler::new(seed), timing);
                let outcome = controller.settle();
                self.phase = Phase::Ready(controller);
                self.react(ctx, outcome);
                true
            }
        }
    }

    /// Starts whatever timers an outcome calls for.
    fn react(&mut self, ctx: &Context<Self>, outcome: ControlOutcome) -> bool {
        match outcome {
            ControlOutcome::Solved(ticket) => self.schedule_advance(ctx, ticket),
            ControlOutcome::Accepted => self.start_burst(ctx),
            _ => {}
        }
        outcome.has_update()
    }

    fn schedule_advance(&mut self, ctx: &Context<Self>, ticket: AdvanceTicket) {
        let Some(controller) = self.controller() else {
            return;
        };
        let millis = timer_millis(controller.timing().solved_pause);
        let link = ctx.link().clone();
        log::debug!("advance from {:?} in {}ms", ticket.from, millis);
        self.pending_advance = Some(Timeout::new(millis, move || {
            link.send_message(Msg::Advance(ticket))
        }));
    }

    fn start_burst(&mut self, ctx: &Context<Self>) {
        let Some(controller) = self.controller() else {
            return;
        };
        let plan = controller.timing().burst;
        let link = ctx.link().clone();
        let interval = Interval::new(timer_millis(plan.interval), move || {
            link.send_message(Msg::BurstTick)
        });
        self.burst = Some(RunningBurst {
            burst: Burst::new(plan, js_random_seed()),
            started: Instant::now(),
            _interval: interval,
        });
    }

    fn tick_burst(&mut self) {
        let Some(running) = &mut self.burst else {
            return;
        };
        match running.burst.emit(running.started.elapsed()) {
            Some(requests) => requests.iter().for_each(confetti::fire),
            None => {
                log::debug!("burst finished");
                self.burst = None;
            }
        }
    }

    /// Dropping the gloo handles cancels them.
    fn cancel_timers(&mut self) {
        self.pending_advance = None;
        self.burst = None;
    }

    fn paint(&self) -> Result<(), String> {
        let Phase::Ready(controller) = &self.phase else {
            return Ok(());
        };
        let Some(slot) = controller.stage().active_puzzle() else {
            return Ok(());
        };
        let (Some(canvas), Some(picture)) = (
            self.canvas.cast::<HtmlCanvasElement>(),
            self.pictures[slot.index()].as_ref(),
        ) else {
            return Ok(());
        };

        let mut surface =
            CanvasSurface::new(&canvas, &picture.element).map_err(|err| format!("{:?}", err))?;
        puzzle::paint(
            &mut surface,
            controller.grid(),
            picture.info,
            controller.geometry(),
        )
        .map_err(|err| format!("{:?}", err))
    }

    fn view_puzzle(
        &self,
        ctx: &Context<Self>,
        controller: &PuzzleController,
        slot: PuzzleSlot,
    ) -> Html {
        let stage = controller.stage();
        let side = controller.geometry().side().to_string();
        let solved = controller.session().is_solved(slot);

        let canvas_ref = self.canvas.clone();
        let onclick = ctx.link().batch_callback(move |e: MouseEvent| {
            let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
            let (x, y) = surface_point(&canvas, e.client_x(), e.client_y());
            Some(Msg::BoardClick(x, y))
        });

        let hint = match stage {
            Stage::Puzzle1SolvedPause => html! {
                <p class="done">{"Puzzle 1 Complete! Moving to Puzzle 2... 🎉"}</p>
            },
            Stage::Puzzle2SolvedPause => html! {
                <p class="done">{"Both Puzzles Complete! 🎉"}</p>
            },
            _ => html! { <p class="hint">{"Click two pieces to swap them!"}</p> },
        };

        html! {
            <div class="page puzzle">
                {Self::view_heading(slot, solved)}
                <div class="board">
                    <canvas ref={self.canvas.clone()} width={side.clone()} height={side} {onclick}/>
                    {hint}
                </div>
            </div>
        }
    }

    fn view_loading(&self, error: Option<&PuzzleError>) -> Html {
        html! {
            <div class="page puzzle">
                {Self::view_heading(PuzzleSlot::First, false)}
                <div class="loading">
                    <p>{"Loading puzzles..."}</p>
                    if let Some(err) = error {
                        <p class="error">{err.to_string()}</p>
                    }
                </div>
            </div>
        }
    }

    fn view_heading(slot: PuzzleSlot, solved: bool) -> Html {
        html! {
            <>
                <h1>{"Valentine's Puzzle 💕"}</h1>
                <p class="progress">
                    {format!("Puzzle {} of {} ", slot.number(), PuzzleSlot::ALL.len())}
                    {if solved { "✓" } else { "" }}
                </p>
            </>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        for slot in PuzzleSlot::ALL {
            ctx.link().send_future(async move {
                Msg::PictureLoaded(slot, load_picture(slot.asset_path()).await)
            });
        }

        Self {
            phase: Phase::Loading(AssetGate::new()),
            pictures: [None, None],
            canvas: NodeRef::default(),
            pending_advance: None,
            burst: None,
            fault: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        if self.fault.is_some() {
            return false;
        }

        match msg {
            PictureLoaded(slot, result) => self.on_picture_loaded(ctx, slot, result),
            BoardClick(x, y) => {
                log::trace!("board click ({}, {})", x, y);
                match self.controller().map(|c| c.click(x, y)) {
                    Some(outcome) => self.react(ctx, outcome),
                    None => false,
                }
            }
            Advance(ticket) => {
                self.pending_advance = None;
                match self.controller().map(|c| c.advance(ticket)) {
                    Some(outcome) => self.react(ctx, outcome),
                    None => false,
                }
            }
            Yes => match self.controller().map(|c| c.answer_yes()) {
                Some(outcome) => self.react(ctx, outcome),
                None => false,
            },
            No => match self.controller().map(|c| c.answer_no()) {
                Some(outcome) => self.react(ctx, outcome),
                None => false,
            },
            Reset => {
                self.cancel_timers();
                match self.controller().map(|c| c.reset()) {
                    Some(outcome) => self.react(ctx, outcome),
                    None => false,
                }
            }
            BurstTick => {
                self.tick_burst();
                false
            }
            Fault(detail) => {
                log::error!("render fault: {}", detail);
                self.cancel_timers();
                self.fault = Some(detail);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(detail) = &self.fault {
            return html! { <FailureView detail={detail.clone()}/> };
        }

        let controller = match &self.phase {
            Phase::Loading(_) => return self.view_loading(None),
            Phase::Failed(err) => return self.view_loading(Some(err)),
            Phase::Ready(controller) => controller,
        };

        let stage = controller.stage();
        match stage.active_puzzle() {
            Some(slot) => self.view_puzzle(ctx, controller, slot),
            None if stage == Stage::QuestionShown => {
                let on_yes = ctx.link().callback(|_: MouseEvent| Msg::Yes);
                let on_no = ctx.link().callback(|_: MouseEvent| Msg::No);
                html! {
                    <QuestionView no_clicks={controller.no_clicks()} {on_yes} {on_no}/>
                }
            }
            None => {
                let on_reset = ctx.link().callback(|_: MouseEvent| Msg::Reset);
                html! { <FinalView {on_reset}/> }
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.fault.is_some() {
            return;
        }
        if let Err(detail) = self.paint() {
            ctx.link().send_message(Msg::Fault(detail));
        }
    }
}
