use std::time::Duration;

use anyhow::Result;
use crossterm::event::{EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
        TableState,
    },
    Frame,
};

use portfolio_tracker_core::models::chart::{AllocationSlice, SymbolHistory};
use portfolio_tracker_core::models::valuation::{Trend, ValuationSummary};
use portfolio_tracker_core::PortfolioTracker;

const SERIES_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::Red,
];

enum View {
    Table,
    Allocation,
    History,
}

#[derive(Clone, Copy, PartialEq)]
enum FormField {
    Symbol,
    Quantity,
    Price,
}

/// State of the add-holding form: symbol, quantity, buy price (USD).
struct AddForm {
    field: FormField,
    symbol: String,
    quantity: String,
    price: String,
}

impl AddForm {
    fn new() -> Self {
        Self {
            field: FormField::Symbol,
            symbol: String::new(),
            quantity: String::new(),
            price: String::new(),
        }
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            FormField::Symbol => &mut self.symbol,
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price,
        }
    }
}

/// Terminal frontend: view glue only. All business logic lives in the core
/// tracker; the app turns key presses into tracker calls and renders the
/// results.
pub struct App {
    tracker: PortfolioTracker,
    valuation: Option<ValuationSummary>,
    allocation: Vec<AllocationSlice>,
    history: Vec<SymbolHistory>,
    view: View,
    form: Option<AddForm>,
    status: Option<String>,
    table_state: TableState,
    should_quit: bool,
}

impl App {
    pub fn new(tracker: PortfolioTracker) -> Self {
        Self {
            tracker,
            valuation: None,
            allocation: Vec::new(),
            history: Vec::new(),
            view: View::Table,
            form: None,
            status: None,
            table_state: TableState::default(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let _ = terminal.clear();

        let mut events = EventStream::new();

        let period = Duration::from_secs_f64(1.0 / 20.0);
        let mut interval = tokio::time::interval(period);

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => { terminal.draw(|frame| self.render(frame))?; },
                Some(Ok(event)) = events.next() => {
                    if let Some(key) = event.as_key_press_event() {
                        self.handle_key(key).await;
                    }
                }
            }
        }

        Ok(())
    }

    // ── Input Handling ──────────────────────────────────────────────

    async fn handle_key(&mut self, key: KeyEvent) {
        if self.form.is_some() {
            self.handle_form_key(key).await;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.form = Some(AddForm::new());
                self.status = None;
            }
            KeyCode::Char('r') => self.revalue().await,
            KeyCode::Char('c') => {
                let currency = self.tracker.toggle_currency().await;
                self.status = Some(format!("Display currency: {currency}"));
                self.revalue().await;
            }
            KeyCode::Char('d') => self.remove_selected().await,
            KeyCode::Char('g') => {
                self.allocation = self.tracker.allocation().await;
                self.view = View::Allocation;
            }
            KeyCode::Char('l') => {
                if self.tracker.holding_count() == 0 {
                    self.status = Some("Add stocks first.".into());
                } else {
                    self.history = self.tracker.history_last_year().await;
                    self.view = View::History;
                }
            }
            KeyCode::Char('t') | KeyCode::Esc => self.view = View::Table,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.form = None;
                return;
            }
            KeyCode::Enter => {
                if self.form.as_ref().map(|f| f.field) == Some(FormField::Price) {
                    self.submit_form().await;
                } else if let Some(form) = self.form.as_mut() {
                    form.field = match form.field {
                        FormField::Symbol => FormField::Quantity,
                        _ => FormField::Price,
                    };
                }
                return;
            }
            _ => {}
        }

        let Some(form) = self.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Backspace => {
                form.active_buffer().pop();
            }
            KeyCode::Tab => {
                form.field = match form.field {
                    FormField::Symbol => FormField::Quantity,
                    FormField::Quantity => FormField::Price,
                    FormField::Price => FormField::Symbol,
                };
            }
            KeyCode::Char(c) => form.active_buffer().push(c),
            _ => {}
        }
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        match self
            .tracker
            .add_holding_from_input(&form.symbol, &form.quantity, &form.price)
        {
            Ok(_) => {
                self.status = Some(format!("Added {}", form.symbol.to_uppercase()));
                self.form = None;
                self.revalue().await;
            }
            Err(e) => {
                // Stay in the form so the user can fix the input
                self.status = Some(e.to_string());
            }
        }
    }

    async fn remove_selected(&mut self) {
        let selected_id = self
            .table_state
            .selected()
            .and_then(|i| self.valuation.as_ref().and_then(|v| v.rows.get(i)))
            .map(|row| row.holding_id);

        match self.tracker.remove_selected(selected_id) {
            Ok(holding) => {
                self.status = Some(format!("Removed {}", holding.symbol));
                self.table_state.select(None);
                self.revalue().await;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    async fn revalue(&mut self) {
        self.valuation = Some(self.tracker.revalue().await);
        self.view = View::Table;
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self
            .valuation
            .as_ref()
            .map(|v| v.rows.len())
            .unwrap_or_default();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.table_state.select(Some(next));
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let form_height = if self.form.is_some() { 3 } else { 0 };
        let [header_area, form_area, main_area, summary_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(form_height),
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        if self.form.is_some() {
            self.render_form(frame, form_area);
        }
        match self.view {
            View::Table => self.render_table(frame, main_area),
            View::Allocation => self.render_allocation(frame, main_area),
            View::History => self.render_history(frame, main_area),
        }
        self.render_summary(frame, summary_area);
        self.render_footer(frame, footer_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let last_updated = self
            .tracker
            .last_updated()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".into());
        let line = Line::from(vec![
            Span::styled(
                "Stock Portfolio Tracker",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  [{}]  Last Updated: {last_updated}",
                self.tracker.display_currency()
            )),
        ]);
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let field = |name: &str, value: &str, active: bool| {
            let style = if active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Span::styled(format!("{name}: {value}  "), style)
        };
        let line = Line::from(vec![
            field("Symbol", &form.symbol, form.field == FormField::Symbol),
            field("Quantity", &form.quantity, form.field == FormField::Quantity),
            field(
                "Buy Price (USD)",
                &form.price,
                form.field == FormField::Price,
            ),
        ]);
        let block = Block::default()
            .title("Add Holding (Enter to advance/submit, Esc to cancel)")
            .borders(Borders::ALL);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Holdings").borders(Borders::ALL);

        let header = Row::new(vec![
            "Symbol",
            "Qty",
            "Buy Price",
            "Curr Price",
            "Value",
            "Gain/Loss",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .valuation
            .iter()
            .flat_map(|v| &v.rows)
            .map(|row| {
                let color = match row.trend {
                    Trend::Gain => Color::Green,
                    Trend::Loss => Color::Red,
                };
                Row::new(vec![
                    Cell::from(row.symbol.clone()),
                    Cell::from(row.quantity.to_string()),
                    Cell::from(format!("{:.2}", row.buy_price)),
                    Cell::from(format!("{:.2}", row.current_price)),
                    Cell::from(format!("{:.2}", row.current_value)),
                    Cell::from(format!("{:.2}", row.gain)),
                ])
                .style(Style::default().fg(color))
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(14),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_allocation(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Portfolio Distribution")
            .borders(Borders::ALL);

        if self.allocation.is_empty() {
            let p = Paragraph::new(Line::from("No holdings to chart")).block(block);
            frame.render_widget(p, area);
            return;
        }

        let labels: Vec<String> = self
            .allocation
            .iter()
            .map(|s| format!("{} {:.1}%", s.symbol, s.share_pct))
            .collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .zip(&self.allocation)
            .map(|(label, slice)| (label.as_str(), slice.value.max(0.0).round() as u64))
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(&data)
            .bar_width(12)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::White));
        frame.render_widget(chart, area);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(
                "Stock Trends (1 Year, {})",
                self.tracker.display_currency()
            ))
            .borders(Borders::ALL);

        let origin = self
            .history
            .iter()
            .filter_map(|s| s.points.first().map(|p| p.date))
            .min();
        let Some(origin) = origin else {
            let p = Paragraph::new(Line::from("No price history to chart")).block(block);
            frame.render_widget(p, area);
            return;
        };

        let series_data: Vec<(String, Vec<(f64, f64)>)> = self
            .history
            .iter()
            .map(|s| {
                let points = s
                    .points
                    .iter()
                    .map(|p| ((p.date - origin).num_days() as f64, p.price))
                    .collect();
                (s.symbol.clone(), points)
            })
            .collect();

        let mut x_max: f64 = 1.0;
        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;
        for (_, points) in &series_data {
            for (x, y) in points {
                x_max = x_max.max(*x);
                y_min = y_min.min(*y);
                y_max = y_max.max(*y);
            }
        }
        if y_min > y_max {
            (y_min, y_max) = (0.0, 1.0);
        }

        let datasets: Vec<Dataset> = series_data
            .iter()
            .enumerate()
            .map(|(i, (symbol, points))| {
                Dataset::default()
                    .name(symbol.clone())
                    .data(points)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
            })
            .collect();

        let chart = Chart::new(datasets)
            .x_axis(Axis::default().title("Days").bounds([0.0, x_max]))
            .y_axis(Axis::default().title("Price").bounds([y_min, y_max]))
            .block(block);
        frame.render_widget(chart, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let mut lines = Vec::new();

        if let Some(v) = &self.valuation {
            let currency = v.currency.code();
            let sign = if v.net >= 0.0 { "+" } else { "" };
            lines.push(Line::from(format!(
                "Total Investment: {:.2} {currency} | Current Value: {:.2} {currency} | Net: {sign}{:.2} {currency}",
                v.total_investment, v.total_value, v.net
            )));
            if let (Some(gainer), Some(loser)) = (&v.top_gainer, &v.top_loser) {
                lines.push(Line::from(format!(
                    "Top Gainer: {} ({:.2}), Top Loser: {} ({:.2})",
                    gainer.symbol, gainer.gain, loser.symbol, loser.gain
                )));
            }
        }
        if let Some(status) = &self.status {
            lines.push(Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let p = Paragraph::new(Line::from(
            "a add | d remove | r refresh | c currency | g distribution | l trends | t table | q quit",
        ))
        .block(block);
        frame.render_widget(p, area);
    }
}
