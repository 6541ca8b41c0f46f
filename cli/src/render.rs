use floodit_core::*;
use std::fmt::Write;

/// Text view of the session: one hex digit per cell, captured cells marked with `*`.
pub fn render(session: &Session) -> String {
    let state = session.state();
    let mut out = String::new();

    for row in 0..state.size() {
        for col in 0..state.size() {
            let coords = (row, col);
            let color = state.color_at(coords).unwrap_or_default();
            let mark = if state.is_captured(coords).unwrap_or(false) { '*' } else { ' ' };
            let _ = write!(out, "{:x}{mark}", color.index());
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "steps: {}  colors: 0-{:x}  {:?}/{:?}  undo: {}  redo: {}",
        state.steps(),
        state.colors() - 1,
        state.topology(),
        state.adjacency(),
        yes_no(session.can_undo()),
        yes_no(session.can_redo()),
    );
    if session.is_finished() {
        let _ = writeln!(out, "Congratulations, you won in {} steps!", state.steps());
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn render_marks_captured_cells_and_reports_win() {
        let state = GameState::from_colors(
            array![[Color(0), Color(1)], [Color(1), Color(1)]],
            6,
            Topology::Plane,
            Adjacency::Orthogonal,
        )
        .unwrap();
        let mut session = Session::from_state(state);

        let text = render(&session);
        assert!(text.starts_with("0*1 \n1 1 \n"), "{text}");
        assert!(text.contains("undo: no"));

        session.select(Color(1)).unwrap();
        let text = render(&session);
        assert!(text.starts_with("1*1*\n1*1*\n"), "{text}");
        assert!(text.contains("won in 1 steps"));
        assert!(text.contains("undo: yes"));
    }
}
