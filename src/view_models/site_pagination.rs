//! Paginación de la tabla de sitios y contadores del resumen

use serde::Serialize;

use crate::models::{SiteRecord, SiteStatus};

/// Filas por página en la tabla de sitios
pub const SITES_PER_PAGE: usize = 6;

/// Contadores sobre la lista completa de sitios de la entidad seleccionada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStats {
    pub total_sites: usize,
    pub normal_sites: usize,
    pub alert_sites: usize,
}

impl MonitoringStats {
    /// `None` si no hay sitios; el panel muestra entonces campos vacíos.
    pub fn from_sites(sites: &[SiteRecord]) -> Option<Self> {
        if sites.is_empty() {
            return None;
        }

        let count = |wanted: &SiteStatus| sites.iter().filter(|s| &s.status == wanted).count();
        Some(Self {
            total_sites: sites.len(),
            normal_sites: count(&SiteStatus::Normal),
            alert_sites: count(&SiteStatus::Alert),
        })
    }
}

/// Cursor de página sobre una lista de sitios. Solo se guarda el índice
/// (base 1); la ventana visible se calcula bajo demanda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePagination {
    page: usize,
    page_size: usize,
}

impl Default for SitePagination {
    fn default() -> Self {
        Self::new(SITES_PER_PAGE)
    }
}

impl SitePagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_sites: usize) -> usize {
        total_sites.div_ceil(self.page_size)
    }

    /// Volver a la primera página; se llama cada vez que cambia la entidad.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Saltar a `page` si está en `[1, total_pages]`. Devuelve si la página
    /// cambió; fuera de rango el cursor no se mueve.
    pub fn go_to(&mut self, page: usize, total_sites: usize) -> bool {
        if page < 1 || page > self.total_pages(total_sites) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self, total_sites: usize) -> bool {
        self.go_to(self.page + 1, total_sites)
    }

    pub fn previous_page(&mut self, total_sites: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page, total_sites),
            None => false,
        }
    }

    /// Porción visible de `sites` para la página actual.
    pub fn window<'a>(&self, sites: &'a [SiteRecord]) -> &'a [SiteRecord] {
        let (start, end) = self.bounds(sites.len());
        &sites[start..end]
    }

    /// Posiciones (base 1, inclusivas) de la primera y última fila visibles.
    pub fn range(&self, total_sites: usize) -> Option<(usize, usize)> {
        let (start, end) = self.bounds(total_sites);
        (start < end).then_some((start + 1, end))
    }

    /// Texto del pie de tabla, p. ej. `Showing 7 to 12 of 13 entries`.
    pub fn entries_label(&self, total_sites: usize) -> String {
        match self.range(total_sites) {
            Some((first, last)) => format!("Showing {} to {} of {} entries", first, last, total_sites),
            None => format!("Showing 0 of {} entries", total_sites),
        }
    }

    fn bounds(&self, total_sites: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.page_size).min(total_sites);
        let end = (self.page * self.page_size).min(total_sites);
        (start, end)
    }
}
