use pdf_writer::Ref;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Font,
    Page(usize),
    ContentForPage(usize),
}

/// Hands out object numbers in the order they are requested, starting at 1.
///
/// The document requests the catalog, the page tree, the font, then every page,
/// then every page's content stream, so for N pages the numbering is fixed:
/// pages are objects `4..4+N` and their contents `4+N..4+2N`.
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        log::trace!("{ref_type:?} is object {id}");
        Ref::new(id)
    }
}
