//! Selector de fecha con calendario
//!
//! Grilla mensual que empieza en lunes, con celdas vacías al inicio. Elegir
//! un día produce `"DD Month YYYY HH:MM"` con la fecha elegida y la hora del
//! momento del clic, no medianoche.

use chrono::{Datelike, Local, Months, NaiveDate, NaiveTime, Timelike};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Botón de un día en la grilla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Las celdas de relleno son `None`, los días reales `Some(date)`.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(first);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.resize(leading, None);
    cells.extend((1..=days).filter_map(|day| NaiveDate::from_ymd_opt(year, month, day).map(Some)));
    cells
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        // diciembre del último año representable
        .unwrap_or(31)
}

/// `"DD Month YYYY HH:MM"`
pub fn format_selection(date: NaiveDate, time_of_day: NaiveTime) -> String {
    format!(
        "{:02} {} {} {:02}:{:02}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year(),
        time_of_day.hour(),
        time_of_day.minute()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    shown_month: NaiveDate,
    open: bool,
}

impl DatePicker {
    /// Selector cerrado mostrando el mes que contiene `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            shown_month: today.with_day(1).unwrap_or(today),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn year(&self) -> i32 {
        self.shown_month.year()
    }

    /// Número de mes (base 1)
    pub fn month(&self) -> u32 {
        self.shown_month.month()
    }

    /// p. ej. `"April 2022"`
    pub fn header_label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.shown_month.month0() as usize], self.year())
    }

    /// Desplazar el mes mostrado en `delta`. Sin límite; si el calendario no
    /// puede representar el resultado, el mes no cambia.
    pub fn navigate(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.shown_month.checked_add_months(months)
        } else {
            self.shown_month.checked_sub_months(months)
        };
        if let Some(month) = shifted {
            self.shown_month = month;
        }
    }

    pub fn cells(&self, today: NaiveDate) -> Vec<Option<DayCell>> {
        month_grid(self.year(), self.month())
            .into_iter()
            .map(|cell| cell.map(|date| DayCell { date, is_today: date == today }))
            .collect()
    }

    /// Clic en una celda. Las vacías se ignoran; un día cierra el popover y
    /// devuelve el valor formateado.
    pub fn select(&mut self, cell: Option<NaiveDate>, time_of_day: NaiveTime) -> Option<String> {
        let date = cell?;
        self.close();
        Some(format_selection(date, time_of_day))
    }

    /// [`select`](Self::select) con la hora local actual.
    pub fn select_now(&mut self, cell: Option<NaiveDate>) -> Option<String> {
        self.select(cell, Local::now().time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 37).unwrap()
    }

    #[test]
    fn thirty_one_day_month_starting_monday_has_no_padding() {
        // el 1 de enero de 2024 es lunes
        let grid = month_grid(2024, 1);
        assert_eq!(grid.len(), 31);
        assert_eq!(grid.iter().filter(|c| c.is_some()).count(), 31);
        assert_eq!(grid[0], Some(date(2024, 1, 1)));
    }

    #[test]
    fn leading_padding_follows_weekday_of_the_first() {
        // el 1 de febrero de 2024 es jueves, año bisiesto
        let grid = month_grid(2024, 2);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 3);
        assert_eq!(grid.iter().flatten().count(), 29);

        // el 1 de febrero de 2023 es miércoles
        let grid = month_grid(2023, 2);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 2);
        assert_eq!(grid.iter().flatten().count(), 28);

        // el 1 de septiembre de 2024 es domingo
        let grid = month_grid(2024, 9);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 6);
        assert_eq!(grid.last(), Some(&Some(date(2024, 9, 30))));
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2024, 13).is_empty());
        assert!(month_grid(2024, 0).is_empty());
    }

    #[test]
    fn selection_mixes_clicked_date_with_current_time() {
        let mut picker = DatePicker::new(date(2022, 4, 15));
        picker.open();

        let value = picker.select(Some(date(2022, 4, 1)), time(23, 42));

        assert_eq!(value.as_deref(), Some("01 April 2022 23:42"));
        assert!(!picker.is_open());
    }

    #[test]
    fn blank_cell_is_ignored() {
        let mut picker = DatePicker::new(date(2022, 4, 15));
        picker.open();

        assert_eq!(picker.select(None, time(8, 5)), None);
        assert!(picker.is_open());
    }

    #[test]
    fn navigation_wraps_years_without_bound() {
        let mut picker = DatePicker::new(date(2023, 12, 31));
        assert_eq!(picker.header_label(), "December 2023");

        picker.navigate(1);
        assert_eq!((picker.year(), picker.month()), (2024, 1));
        picker.navigate(-1);
        picker.navigate(-1);
        assert_eq!(picker.header_label(), "November 2023");
        picker.navigate(-24);
        assert_eq!((picker.year(), picker.month()), (2021, 11));
    }

    #[test]
    fn cells_flag_today() {
        let today = date(2024, 1, 10);
        let picker = DatePicker::new(today);
        let cells = picker.cells(today);

        let flagged: Vec<_> = cells.iter().flatten().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].day(), 10);
    }
}
