/// Номер запроса, выданный [`RequestGeneration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Монотонный счётчик запросов представления.
///
/// Каждая загрузка получает новый [`Ticket`]; применять можно только ответ
/// с последним выданным номером, остальные устарели.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Выдаёт номер для нового запроса. Все ранее выданные устаревают.
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// `true`, если `ticket` выдан последним.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
