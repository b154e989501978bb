use leptos::*;
use leptos_meta::*;
use std::rc::Rc;
use crate::components::board_view::BoardView;
use crate::data::load_default_board;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = match load_default_board() {
        Ok((snapshot, colors)) => view! {
            <BoardView snapshot=Rc::new(snapshot) colors=colors />
        }
        .into_view(),
        Err(err) => {
            logging::error!("Failed to load board: {err}");
            view! { <p class="board-error">{err.to_string()}</p> }.into_view()
        }
    };

    view! {
        <Title text="Rail Board"/>

        <div class="app" id="game-container">
            {board}
        </div>
    }
}
